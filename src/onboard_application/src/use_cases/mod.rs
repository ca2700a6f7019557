pub mod add_account;

pub use add_account::AddAccountUseCase;
