mod routing_tests;
