use crate::api::ApiRequest;
use crate::product::{Product, ProductId};
use crate::state::{FormErrors, OrderDraft, OrderField, OrderReceipt};

#[derive(Debug, Clone, PartialEq)]
pub enum ShopEvent {
    /// The catalog was replaced; carries the new catalog in order
    ItemsChanged {
        catalog: Vec<Product>,
    },
    /// The product list request completed
    CatalogLoaded(Vec<Product>),
    CardSelect(ProductId),
    PreviewChanged(Product),
    /// Fresh product details arrived for the preview
    PreviewLoaded(Product),
    CardToBasket(ProductId),
    BasketChanged {
        count: usize,
        total: Option<u32>,
    },
    BasketOpen,
    BasketDelete(ProductId),
    BasketOrder,
    OrderInputChange {
        field: OrderField,
        value: String,
    },
    OrderFormErrorsChange(FormErrors),
    ContactsFormErrorsChange(FormErrors),
    OrderReady(OrderDraft),
    ContactsReady(OrderDraft),
    OrderSubmit,
    ContactsSubmit,
    OrderSuccess(OrderReceipt),
    ImageLoaded {
        url: String,
        bytes: Vec<u8>,
    },
    ApiFailed {
        request: ApiRequest,
        message: String,
    },
    ModalOpen,
    ModalClose,
}

/// Payload-free tag of a [`ShopEvent`], used as the dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ItemsChanged,
    CatalogLoaded,
    CardSelect,
    PreviewChanged,
    PreviewLoaded,
    CardToBasket,
    BasketChanged,
    BasketOpen,
    BasketDelete,
    BasketOrder,
    OrderInputChange,
    OrderFormErrorsChange,
    ContactsFormErrorsChange,
    OrderReady,
    ContactsReady,
    OrderSubmit,
    ContactsSubmit,
    OrderSuccess,
    ImageLoaded,
    ApiFailed,
    ModalOpen,
    ModalClose,
}

impl EventKind {
    /// Topic name, `namespace:action`
    pub fn name(self) -> &'static str {
        match self {
            Self::ItemsChanged => "items:changed",
            Self::CatalogLoaded => "catalog:loaded",
            Self::CardSelect => "card-catalog:select",
            Self::PreviewChanged => "card-preview:changed",
            Self::PreviewLoaded => "card-preview:loaded",
            Self::CardToBasket => "card:toBasket",
            Self::BasketChanged => "basket:changed",
            Self::BasketOpen => "basket:open",
            Self::BasketDelete => "basket:delete",
            Self::BasketOrder => "basket:order",
            Self::OrderInputChange => "orderInput:change",
            Self::OrderFormErrorsChange => "orderFormErrors:change",
            Self::ContactsFormErrorsChange => "contactsFormErrors:change",
            Self::OrderReady => "order:ready",
            Self::ContactsReady => "contacts:ready",
            Self::OrderSubmit => "order:submit",
            Self::ContactsSubmit => "contacts:submit",
            Self::OrderSuccess => "order:success",
            Self::ImageLoaded => "image:loaded",
            Self::ApiFailed => "api:failed",
            Self::ModalOpen => "modal:open",
            Self::ModalClose => "modal:close",
        }
    }
}

impl ShopEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ItemsChanged { .. } => EventKind::ItemsChanged,
            Self::CatalogLoaded(_) => EventKind::CatalogLoaded,
            Self::CardSelect(_) => EventKind::CardSelect,
            Self::PreviewChanged(_) => EventKind::PreviewChanged,
            Self::PreviewLoaded(_) => EventKind::PreviewLoaded,
            Self::CardToBasket(_) => EventKind::CardToBasket,
            Self::BasketChanged { .. } => EventKind::BasketChanged,
            Self::BasketOpen => EventKind::BasketOpen,
            Self::BasketDelete(_) => EventKind::BasketDelete,
            Self::BasketOrder => EventKind::BasketOrder,
            Self::OrderInputChange { .. } => EventKind::OrderInputChange,
            Self::OrderFormErrorsChange(_) => EventKind::OrderFormErrorsChange,
            Self::ContactsFormErrorsChange(_) => EventKind::ContactsFormErrorsChange,
            Self::OrderReady(_) => EventKind::OrderReady,
            Self::ContactsReady(_) => EventKind::ContactsReady,
            Self::OrderSubmit => EventKind::OrderSubmit,
            Self::ContactsSubmit => EventKind::ContactsSubmit,
            Self::OrderSuccess(_) => EventKind::OrderSuccess,
            Self::ImageLoaded { .. } => EventKind::ImageLoaded,
            Self::ApiFailed { .. } => EventKind::ApiFailed,
            Self::ModalOpen => EventKind::ModalOpen,
            Self::ModalClose => EventKind::ModalClose,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// What a handler subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Kind(EventKind),
    /// Every event whose topic name starts with the prefix, e.g. `"basket:"`
    Prefix(&'static str),
    All,
}

impl Topic {
    pub fn matches(&self, kind: EventKind) -> bool {
        match self {
            Self::Kind(expected) => *expected == kind,
            Self::Prefix(prefix) => kind.name().starts_with(prefix),
            Self::All => true,
        }
    }
}

impl From<EventKind> for Topic {
    fn from(kind: EventKind) -> Self {
        Self::Kind(kind)
    }
}
