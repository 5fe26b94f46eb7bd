use std::sync::Arc;

use logger::TracingLogger;

use gateway::category::gateway::CategoryGatewayHttp;
use gateway::client::ApiClient;
use gateway::image::uploader::ImageStoreHttp;
use gateway::product::gateway::ProductGatewayHttp;

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetCategoriesUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::image::upload::UploadImageUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_page::GetProductPageUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;

use crate::config::app_config::AppConfig;
use crate::controller::category::CategoryController;
use crate::controller::product::ProductController;

pub struct DependencyContainer {
    pub product_controller: ProductController,
    pub category_controller: CategoryController,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let category_gateway = Arc::new(CategoryGatewayHttp::new(ApiClient::new(
            config.api.base_url.clone(),
        )));
        let product_gateway = Arc::new(ProductGatewayHttp::new(ApiClient::new(
            config.api.base_url.clone(),
        )));
        let image_store = Arc::new(ImageStoreHttp::new(ApiClient::new(
            config.api.base_url.clone(),
        )));

        // Category use cases
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            gateway: category_gateway.clone(),
            logger: logger.clone(),
        });
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            gateway: category_gateway.clone(),
            logger: logger.clone(),
        });
        let update_category_use_case = Arc::new(UpdateCategoryUseCaseImpl {
            gateway: category_gateway.clone(),
            logger: logger.clone(),
        });
        let delete_category_use_case = Arc::new(DeleteCategoryUseCaseImpl {
            gateway: category_gateway,
            logger: logger.clone(),
        });

        // Product use cases
        let get_page_use_case = Arc::new(GetProductPageUseCaseImpl {
            gateway: product_gateway.clone(),
            logger: logger.clone(),
        });
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            gateway: product_gateway.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            gateway: product_gateway.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            gateway: product_gateway,
            logger: logger.clone(),
        });
        let upload_image_use_case = Arc::new(UploadImageUseCaseImpl {
            store: image_store,
            logger: logger.clone(),
        });

        let product_controller = ProductController::new(
            get_page_use_case,
            create_product_use_case,
            update_product_use_case,
            delete_product_use_case,
            upload_image_use_case,
            get_categories_use_case.clone(),
            logger.clone(),
            config.owner.owner_id,
        );

        let category_controller = CategoryController::new(
            get_categories_use_case,
            create_category_use_case,
            update_category_use_case,
            delete_category_use_case,
            logger,
        );

        Self {
            product_controller,
            category_controller,
        }
    }
}
