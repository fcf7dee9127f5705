mod test_submit;
