/// Entity-level validation rules
pub mod validation_tests;
