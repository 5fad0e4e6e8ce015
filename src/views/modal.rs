use super::card::CardData;

/// What the modal is currently showing
#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    Preview(CardData),
    Basket,
    Order,
    Contacts,
    Success,
}

impl ModalContent {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Preview(_) => "Product",
            Self::Basket => "Basket",
            Self::Order => "Checkout",
            Self::Contacts => "Checkout",
            Self::Success => "Done",
        }
    }
}

#[derive(Debug, Default)]
pub struct ModalView {
    content: Option<ModalContent>,
}

impl ModalView {
    pub fn open(&mut self, content: ModalContent) {
        self.content = Some(content);
    }

    pub fn close(&mut self) {
        self.content = None;
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn is_showing(&self, content: &ModalContent) -> bool {
        self.content.as_ref() == Some(content)
    }
}
