//! Page Components

mod checkout;
mod return_page;

pub use checkout::CheckoutPage;
pub use return_page::ReturnPage;
