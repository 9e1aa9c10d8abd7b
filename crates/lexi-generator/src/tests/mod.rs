mod orchestrator_tests;
