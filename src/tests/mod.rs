mod code_tests;
mod draft_tests;
mod error_tests;
mod formatting_tests;
mod score_tests;
mod storage_tests;
mod validation_tests;
