mod webhook_tests;
