#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use futures::executor::{LocalPool, LocalSpawner};
use futures::future;
use futures::task::LocalSpawnExt;
use uuid::Uuid;

use storefront::api::{ApiFuture, ShopApi, Task, TaskRunner, boxed};
use storefront::error::ApiError;
use storefront::product::{Product, ProductId};
use storefront::state::{OrderReceipt, OrderRequest};
use storefront::{ShopEvent, StorefrontApp};

pub fn product(id: &str, title: &str, price: Option<u32>, category: &str) -> Product {
    let mut product = Product::new(id, title, price).with_category(category);
    product.image = format!("https://cdn.test/{}.svg", id);
    product
}

pub fn catalog() -> Vec<Product> {
    vec![
        product("a", "+1 час в сутках", Some(750), "софт-скил"),
        product("b", "HEX-леденец", Some(1450), "другое"),
        product("c", "Мамка-таймер", None, "софт-скил"),
        product("d", "Фреймворк куки судьбы", Some(2500), "дополнительное"),
    ]
}

pub const SVG_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="12"><rect width="16" height="12" fill="#5f8dff"/></svg>"##;

pub fn id(value: &str) -> ProductId {
    ProductId::new(value)
}

/// In-memory backend
#[derive(Clone, Default)]
pub struct MockApi {
    pub catalog: Vec<Product>,
    pub fail_catalog: bool,
    pub fail_item: bool,
    pub fail_order: bool,
    pub orders: Arc<Mutex<Vec<OrderRequest>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            catalog: catalog(),
            ..Self::default()
        }
    }
}

impl ShopApi for MockApi {
    fn get_product_list(&self) -> ApiFuture<Vec<Product>> {
        let result = if self.fail_catalog {
            Err(ApiError::Transport("connection refused".to_owned()))
        } else {
            Ok(self.catalog.clone())
        };
        boxed(future::ready(result))
    }

    fn get_product_item(&self, id: &ProductId) -> ApiFuture<Product> {
        let found = self.catalog.iter().find(|item| &item.id == id).cloned();
        let result = match found {
            Some(item) if !self.fail_item => Ok(item),
            _ => Err(ApiError::Status {
                status: 404,
                message: "NotFound".to_owned(),
            }),
        };
        boxed(future::ready(result))
    }

    fn order_products(&self, order: OrderRequest) -> ApiFuture<OrderReceipt> {
        self.orders.lock().unwrap().push(order.clone());
        let result = if self.fail_order {
            Err(ApiError::Transport("timed out".to_owned()))
        } else {
            Ok(OrderReceipt {
                id: Uuid::new_v4(),
                total: order.total,
            })
        };
        boxed(future::ready(result))
    }

    /// Every image but product `c`'s exists on the cdn
    fn get_image(&self, url: &str) -> ApiFuture<Vec<u8>> {
        let result = if url.ends_with("/c.svg") {
            Err(ApiError::Status {
                status: 404,
                message: "Not Found".to_owned(),
            })
        } else {
            Ok(SVG_ICON.as_bytes().to_vec())
        };
        boxed(future::ready(result))
    }
}

/// Runs tasks on a `LocalPool` the test drives by hand
pub struct PoolRunner {
    spawner: LocalSpawner,
}

impl TaskRunner for PoolRunner {
    fn spawn(&self, task: Task) {
        self.spawner.spawn_local(task).expect("pool is alive");
    }
}

pub struct Harness {
    pub app: StorefrontApp,
    pub orders: Arc<Mutex<Vec<OrderRequest>>>,
    pool: LocalPool,
}

impl Harness {
    pub fn new(api: MockApi) -> Self {
        let pool = LocalPool::new();
        let runner = PoolRunner {
            spawner: pool.spawner(),
        };
        let orders = api.orders.clone();
        let app = StorefrontApp::new(Box::new(api), Box::new(runner));
        let mut harness = Self { app, orders, pool };
        harness.settle();
        harness
    }

    /// Run requests and deliver events until nothing moves
    pub fn settle(&mut self) {
        loop {
            self.pool.run_until_stalled();
            if self.app.pump() == 0 {
                break;
            }
        }
    }

    /// Emit as a view would, then settle
    pub fn emit(&mut self, event: ShopEvent) {
        self.app.storefront().events().emit(event);
        self.settle();
    }

    pub fn orders(&self) -> Vec<OrderRequest> {
        self.orders.lock().unwrap().clone()
    }
}
