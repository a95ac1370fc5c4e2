use actix_web::web;

use crate::application::{ClientOrderService, ClientService, ItemService, OrderService};
use crate::db::DbPool;
use crate::infrastructure::{DieselClientRepository, DieselItemRepository, DieselOrderRepository};

pub type Clients = ClientService<DieselClientRepository>;
pub type Items = ItemService<DieselItemRepository>;
pub type Orders = OrderService<DieselClientRepository, DieselItemRepository, DieselOrderRepository>;
pub type ClientOrders =
    ClientOrderService<DieselClientRepository, DieselItemRepository, DieselOrderRepository>;

/// Services shared by every worker, wired to one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub clients: web::Data<Clients>,
    pub items: web::Data<Items>,
    pub orders: web::Data<Orders>,
    pub client_orders: web::Data<ClientOrders>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let clients = DieselClientRepository::new(pool.clone());
        let items = DieselItemRepository::new(pool.clone());
        let orders = DieselOrderRepository::new(pool);

        Self {
            clients: web::Data::new(ClientService::new(clients.clone())),
            items: web::Data::new(ItemService::new(items.clone())),
            orders: web::Data::new(OrderService::new(
                clients.clone(),
                items.clone(),
                orders.clone(),
            )),
            client_orders: web::Data::new(ClientOrderService::new(clients, items, orders)),
        }
    }
}
