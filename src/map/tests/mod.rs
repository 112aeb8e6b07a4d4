mod plane_tests;
