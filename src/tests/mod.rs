mod test_break;
