mod bearing_tests;
mod reversal_tests;
