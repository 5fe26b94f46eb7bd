use std::sync::Arc;

use business::domain::category::errors::CategoryError;
use business::domain::category::model::Category;
use business::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::GetCategoriesUseCase;
use business::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use business::domain::logger::Logger;

use super::FormError;
use crate::view::form::{FormField, FormView};
use crate::view::table::{TableView, category_table};

/// The shared category form. Mode is carried by the hidden identifier:
/// empty means create, populated means edit.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    fn from_category(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

pub struct CategoryListView {
    pub table: TableView,
}

pub struct CategoryController {
    get_all_use_case: Arc<dyn GetCategoriesUseCase>,
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    logger: Arc<dyn Logger>,
    categories: Vec<Category>,
    form: Option<CategoryForm>,
}

impl CategoryController {
    pub fn new(
        get_all_use_case: Arc<dyn GetCategoriesUseCase>,
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            get_all_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            logger,
            categories: Vec::new(),
            form: None,
        }
    }

    /// Fetch all categories and describe them as a table. No pagination on
    /// this slice.
    pub async fn load(&mut self) -> Result<CategoryListView, CategoryError> {
        let categories = self.get_all_use_case.execute().await?;
        self.categories = categories;
        Ok(self.current_view())
    }

    fn current_view(&self) -> CategoryListView {
        CategoryListView {
            table: category_table(&self.categories),
        }
    }

    pub fn open_create(&mut self) -> FormView {
        self.form = Some(CategoryForm::default());
        self.form_view().expect("form was just opened")
    }

    pub fn open_edit(&mut self, id: i64) -> Option<FormView> {
        let category = self.categories.iter().find(|c| c.id == id)?;
        self.form = Some(CategoryForm::from_category(category));
        self.form_view()
    }

    pub fn form_mut(&mut self) -> Option<&mut CategoryForm> {
        self.form.as_mut()
    }

    pub fn form_view(&self) -> Option<FormView> {
        let form = self.form.as_ref()?;
        let title = if form.is_edit() {
            "Edit Category"
        } else {
            "Add Category"
        };

        Some(FormView {
            title: title.to_string(),
            fields: vec![
                FormField {
                    label: "Name",
                    value: form.name.clone(),
                },
                FormField {
                    label: "Description",
                    value: form.description.clone(),
                },
            ],
            image_preview: None,
        })
    }

    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Submit the open form: create when the identifier is empty, update
    /// with it otherwise. Failures keep the form open and surface a
    /// user-visible message, same policy as the product flow.
    pub async fn submit(&mut self) -> Result<CategoryListView, FormError> {
        let form = self.form.clone().ok_or(FormError::NotOpen)?;

        let description = {
            let trimmed = form.description.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        match form.id {
            Some(id) => {
                self.update_use_case
                    .execute(UpdateCategoryParams {
                        id,
                        name: form.name.trim().to_string(),
                        description,
                    })
                    .await?
            }
            None => {
                self.create_use_case
                    .execute(CreateCategoryParams {
                        name: form.name.trim().to_string(),
                        description,
                    })
                    .await?
            }
        }

        self.form = None;

        match self.load().await {
            Ok(view) => Ok(view),
            Err(e) => {
                self.logger
                    .error(&format!("Reload after save failed: {}", e));
                Ok(self.current_view())
            }
        }
    }

    /// Exactly one delete call followed by exactly one list reload.
    pub async fn delete(&mut self, id: i64) -> Result<CategoryListView, CategoryError> {
        self.delete_use_case
            .execute(DeleteCategoryParams { id })
            .await?;

        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::GatewayError;
    use mockall::mock;

    mock! {
        pub GetAllUc {}

        #[async_trait]
        impl GetCategoriesUseCase for GetAllUc {
            async fn execute(&self) -> Result<Vec<Category>, CategoryError>;
        }
    }

    mock! {
        pub CreateUc {}

        #[async_trait]
        impl CreateCategoryUseCase for CreateUc {
            async fn execute(&self, params: CreateCategoryParams) -> Result<(), CategoryError>;
        }
    }

    mock! {
        pub UpdateUc {}

        #[async_trait]
        impl UpdateCategoryUseCase for UpdateUc {
            async fn execute(&self, params: UpdateCategoryParams) -> Result<(), CategoryError>;
        }
    }

    mock! {
        pub DeleteUc {}

        #[async_trait]
        impl DeleteCategoryUseCase for DeleteUc {
            async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn beverages() -> Vec<Category> {
        vec![Category::from_remote(
            3,
            "Beverages".to_string(),
            Some("Drinks".to_string()),
            None,
        )]
    }

    struct Mocks {
        get_all: MockGetAllUc,
        create: MockCreateUc,
        update: MockUpdateUc,
        delete: MockDeleteUc,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                get_all: MockGetAllUc::new(),
                create: MockCreateUc::new(),
                update: MockUpdateUc::new(),
                delete: MockDeleteUc::new(),
            }
        }

        fn into_controller(self) -> CategoryController {
            CategoryController::new(
                Arc::new(self.get_all),
                Arc::new(self.create),
                Arc::new(self.update),
                Arc::new(self.delete),
                mock_logger(),
            )
        }
    }

    #[tokio::test]
    async fn should_call_create_once_and_never_update_when_identifier_empty() {
        let mut mocks = Mocks::new();
        mocks.get_all.expect_execute().returning(|| Ok(beverages()));
        mocks.create.expect_execute().times(1).returning(|_| Ok(()));
        mocks.update.expect_execute().never();

        let mut controller = mocks.into_controller();
        let view = controller.open_create();
        assert_eq!(view.title, "Add Category");

        controller.form_mut().unwrap().name = "Beverages".to_string();

        let result = controller.submit().await;

        assert!(result.is_ok());
        assert!(controller.form_view().is_none());
    }

    #[tokio::test]
    async fn should_call_update_once_with_identifier_when_editing() {
        let mut mocks = Mocks::new();
        mocks.get_all.expect_execute().returning(|| Ok(beverages()));
        mocks.create.expect_execute().never();
        mocks
            .update
            .expect_execute()
            .withf(|params| params.id == 3)
            .times(1)
            .returning(|_| Ok(()));

        let mut controller = mocks.into_controller();
        controller.load().await.unwrap();

        let view = controller.open_edit(3);
        assert!(view.is_some());
        assert_eq!(view.unwrap().title, "Edit Category");

        let result = controller.submit().await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_delete_once_then_reload_once() {
        let mut mocks = Mocks::new();
        mocks.delete.expect_execute().times(1).returning(|_| Ok(()));
        mocks
            .get_all
            .expect_execute()
            .times(1)
            .returning(|| Ok(beverages()));

        let mut controller = mocks.into_controller();

        let result = controller.delete(3).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_keep_form_open_and_surface_error_when_save_fails() {
        let mut mocks = Mocks::new();
        mocks
            .create
            .expect_execute()
            .returning(|_| Err(CategoryError::Gateway(GatewayError::Network)));

        let mut controller = mocks.into_controller();
        controller.open_create();
        controller.form_mut().unwrap().name = "Beverages".to_string();

        let result = controller.submit().await;

        assert!(matches!(result, Err(FormError::Category(_))));
        assert!(controller.form_view().is_some());
    }

    #[tokio::test]
    async fn should_send_empty_description_as_none() {
        let mut mocks = Mocks::new();
        mocks.get_all.expect_execute().returning(|| Ok(beverages()));
        mocks
            .create
            .expect_execute()
            .withf(|params| params.description.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let mut controller = mocks.into_controller();
        controller.open_create();
        let form = controller.form_mut().unwrap();
        form.name = "Beverages".to_string();
        form.description = "   ".to_string();

        let result = controller.submit().await;

        assert!(result.is_ok());
    }
}
