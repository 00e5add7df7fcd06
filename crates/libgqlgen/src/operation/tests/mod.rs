mod cycle_tracker_tests;
