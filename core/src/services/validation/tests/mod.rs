mod widget_tests;
