//! Stream identifiers for the notification channel.

/// The four independent streams carried by the notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamName {
    /// A view wants this product loaded into the edit form.
    ProductToEdit,
    /// The product was successfully updated server-side.
    ProductEdited,
    /// The product was successfully created server-side.
    ProductAdded,
    /// A human-readable status or error line for display.
    MessageUpdated,
}

impl StreamName {
    pub const ALL: [StreamName; 4] = [
        StreamName::ProductToEdit,
        StreamName::ProductEdited,
        StreamName::ProductAdded,
        StreamName::MessageUpdated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamName::ProductToEdit => "product-to-edit",
            StreamName::ProductEdited => "product-edited",
            StreamName::ProductAdded => "product-added",
            StreamName::MessageUpdated => "message-updated",
        }
    }
}

impl std::fmt::Display for StreamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
