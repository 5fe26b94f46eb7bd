/// One labeled field of the open form, already rendered to text.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

/// The open form described as data. The title is the only thing that
/// distinguishes create from edit.
#[derive(Debug, Clone)]
pub struct FormView {
    pub title: String,
    pub fields: Vec<FormField>,
    pub image_preview: Option<String>,
}
