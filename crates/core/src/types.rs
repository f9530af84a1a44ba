/// Primary keys are 64-bit auto-increment integers in every supported store.
pub type DbId = i64;
