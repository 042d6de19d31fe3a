pub mod order_type;
pub mod owner;
pub mod payment_method;
pub mod platform;

pub use order_type::OrderType;
pub use owner::OrderOwner;
pub use payment_method::PaymentMethod;
pub use platform::Platform;
