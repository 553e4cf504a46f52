//! Add/edit product form state.
//!
//! The form keeps raw text for every field and only converts it into a
//! [`ProductDraft`] on submit, so a half-typed price never leaves the form.

use pm_core::{Category, FormError, Product, ProductDraft, ProductId};

/// Field focus inside the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Product name.
    #[default]
    Name,
    /// Price in rupees.
    Price,
    /// Category picker.
    Category,
    /// Units in stock.
    Stock,
    /// Free-form description.
    Description,
}

impl FormField {
    /// All fields in focus order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Price,
        Self::Category,
        Self::Stock,
        Self::Description,
    ];

    /// Returns the next field in focus order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::Price => Self::Category,
            Self::Category => Self::Stock,
            Self::Stock => Self::Description,
            Self::Description => Self::Name,
        }
    }

    /// Returns the previous field in focus order.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Price => Self::Name,
            Self::Category => Self::Price,
            Self::Stock => Self::Category,
            Self::Description => Self::Stock,
        }
    }

    /// Returns the field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Product Name",
            Self::Price => "Price (₹)",
            Self::Category => "Category",
            Self::Stock => "Stock",
            Self::Description => "Description",
        }
    }

    /// Returns the field matching a [`FormError::field`] label.
    #[must_use]
    pub fn from_error(error: &FormError) -> Self {
        match error.field() {
            "price" => Self::Price,
            "stock" => Self::Stock,
            "category" => Self::Category,
            _ => Self::Name,
        }
    }
}

/// Input state for the add/edit product modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// The product being edited, or `None` when adding.
    pub editing: Option<ProductId>,
    /// Raw name input.
    pub name: String,
    /// Raw price input.
    pub price: String,
    /// Selected category.
    pub category: Category,
    /// Raw stock input.
    pub stock: String,
    /// Raw description input.
    pub description: String,
    /// Which field is active.
    pub active_field: FormField,
    /// Conversion error from the last submit attempt.
    pub error: Option<FormError>,
}

impl ProductForm {
    /// Creates an empty form for a new product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form prefilled from an existing product.
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            editing: Some(product.id),
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category,
            stock: product.stock.to_string(),
            description: product.description.clone(),
            active_field: FormField::Name,
            error: None,
        }
    }

    /// Returns `true` when editing an existing product.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Returns the modal title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Product"
        } else {
            "Add New Product"
        }
    }

    /// Returns the line shown under the title.
    #[must_use]
    pub const fn subtitle(&self) -> &'static str {
        if self.is_editing() {
            "Update the product details below."
        } else {
            "Fill in the details to add a new product."
        }
    }

    /// Returns the submit hint label.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Product"
        } else {
            "Add Product"
        }
    }

    /// Moves focus to the next field.
    pub fn focus_next(&mut self) {
        self.active_field = self.active_field.next();
    }

    /// Moves focus to the previous field.
    pub fn focus_previous(&mut self) {
        self.active_field = self.active_field.previous();
    }

    /// Returns the raw text of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Category => self.category.label(),
            FormField::Stock => &self.stock,
            FormField::Description => &self.description,
        }
    }

    /// Returns the active text input, or `None` when the category picker has
    /// focus.
    pub fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            FormField::Name => Some(&mut self.name),
            FormField::Price => Some(&mut self.price),
            FormField::Category => None,
            FormField::Stock => Some(&mut self.stock),
            FormField::Description => Some(&mut self.description),
        }
    }

    /// Types a character into the active field.
    pub fn input(&mut self, c: char) {
        if let Some(input) = self.active_input_mut() {
            input.push(c);
        }
    }

    /// Appends pasted text to the active field, dropping line breaks.
    pub fn paste(&mut self, text: &str) {
        if let Some(input) = self.active_input_mut() {
            input.extend(text.chars().filter(|c| !c.is_control()));
        }
    }

    /// Deletes the last character of the active field.
    pub fn backspace(&mut self) {
        if let Some(input) = self.active_input_mut() {
            input.pop();
        }
    }

    /// Sets the category.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Converts the raw input into a draft.
    ///
    /// On failure the error is kept for display and focus jumps to the
    /// offending field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if a numeric field does not parse.
    pub fn to_draft(&mut self) -> Result<ProductDraft, FormError> {
        let parsed = ProductDraft::parse(
            &self.name,
            &self.price,
            self.category.label(),
            &self.stock,
            &self.description,
        );
        match parsed {
            Ok(draft) => {
                self.error = None;
                Ok(draft)
            }
            Err(error) => {
                self.active_field = FormField::from_error(&error);
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn product() -> Product {
        Product {
            id: ProductId::new(7),
            name: "Desk Lamp".to_owned(),
            price: 1299,
            category: Category::Home,
            stock: 12,
            description: "Warm light".to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            is_active: true,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_field_cycle() {
        let mut field = FormField::Name;
        for _ in 0..FormField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Description);
    }

    #[test]
    fn test_new_form_titles() {
        let form = ProductForm::new();
        assert!(!form.is_editing());
        assert_eq!(form.title(), "Add New Product");
        assert_eq!(form.submit_label(), "Add Product");
    }

    #[test]
    fn test_edit_prefills() {
        let form = ProductForm::edit(&product());
        assert_eq!(form.editing, Some(ProductId::new(7)));
        assert_eq!(form.price, "1299");
        assert_eq!(form.value(FormField::Category), "Home");
        assert_eq!(form.title(), "Edit Product");
        assert_eq!(form.subtitle(), "Update the product details below.");
    }

    #[test]
    fn test_input_goes_to_active_field() {
        let mut form = ProductForm::new();
        form.input('M');
        form.input('u');
        form.input('g');
        form.focus_next();
        form.paste("2\n50");
        form.backspace();
        assert_eq!(form.name, "Mug");
        assert_eq!(form.price, "25");
    }

    #[test]
    fn test_category_field_ignores_typing() {
        let mut form = ProductForm::new();
        form.active_field = FormField::Category;
        form.input('x');
        form.backspace();
        assert_eq!(form.category, Category::default());
        assert!(form.active_input_mut().is_none());
    }

    #[test]
    fn test_to_draft() {
        let mut form = ProductForm::edit(&product());
        form.set_category(Category::Kitchen);
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.name, "Desk Lamp");
        assert_eq!(draft.price, 1299);
        assert_eq!(draft.category, Category::Kitchen);
        assert_eq!(draft.stock, 12);
    }

    #[test]
    fn test_to_draft_reports_bad_number() {
        let mut form = ProductForm::new();
        form.name = "Mug".to_owned();
        form.stock = "ten".to_owned();
        let err = form.to_draft().unwrap_err();
        assert_eq!(err.field(), "stock");
        assert_eq!(form.active_field, FormField::Stock);
        assert_eq!(form.error, Some(err));
    }

    #[test]
    fn test_empty_numbers_are_zero() {
        let mut form = ProductForm::new();
        form.name = "Freebie".to_owned();
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.price, 0);
        assert_eq!(draft.stock, 0);
        assert!(form.error.is_none());
    }
}
