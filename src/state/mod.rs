mod app_state;
mod order;

pub use app_state::AppState;
pub use order::{
    FormErrors,
    OrderDraft,
    OrderField,
    OrderReceipt,
    OrderRequest,
    PaymentMethod,
};
