pub mod validator;

pub use validator::IValidator;
