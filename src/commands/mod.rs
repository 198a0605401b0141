pub mod skin_processor;
pub mod validator;
