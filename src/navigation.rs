//! Role-scoped route table: which screen a role lands on after login and
//! which screens it may reach.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Screen {
    Home,
    ProductDetail,
    Cart,
    Favourite,
    OrderHistory,
    Payment,
    Setting,
    EditAccount,
    AdminProduct,
    AdminCategory,
}

impl Screen {
    /// API path backing the screen.
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Home => "/api/catalog/products",
            Screen::ProductDetail => "/api/catalog/products/{id}",
            Screen::Cart => "/api/cart",
            Screen::Favourite => "/api/favourites",
            Screen::OrderHistory => "/api/orders",
            Screen::Payment => "/api/cart/checkout",
            Screen::Setting => "/api/navigation",
            Screen::EditAccount => "/api/account",
            Screen::AdminProduct => "/api/admin/products",
            Screen::AdminCategory => "/api/admin/categories",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RouteEntry {
    pub screen: Screen,
    pub path: String,
}

impl From<Screen> for RouteEntry {
    fn from(screen: Screen) -> Self {
        Self {
            screen,
            path: screen.path().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoleRoutes {
    pub entry: RouteEntry,
    pub screens: Vec<RouteEntry>,
}

impl RoleRoutes {
    pub fn new(entry: Screen, screens: &[Screen]) -> Self {
        Self {
            entry: entry.into(),
            screens: screens.iter().copied().map(RouteEntry::from).collect(),
        }
    }

    pub fn allows(&self, screen: Screen) -> bool {
        self.screens.iter().any(|r| r.screen == screen)
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: BTreeMap<Role, RoleRoutes>,
}

impl RouteTable {
    pub fn empty() -> Self {
        Self {
            routes: BTreeMap::new(),
        }
    }

    pub fn with_role(mut self, role: Role, routes: RoleRoutes) -> Self {
        self.routes.insert(role, routes);
        self
    }

    pub fn routes_for(&self, role: Role) -> Option<&RoleRoutes> {
        self.routes.get(&role)
    }

    pub fn entry_for(&self, role: Role) -> Option<&RouteEntry> {
        self.routes_for(role).map(|r| &r.entry)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        RouteTable::empty()
            .with_role(
                Role::SHOPPER,
                RoleRoutes::new(
                    Screen::Home,
                    &[
                        Screen::Home,
                        Screen::ProductDetail,
                        Screen::Cart,
                        Screen::Favourite,
                        Screen::OrderHistory,
                        Screen::Payment,
                        Screen::Setting,
                        Screen::EditAccount,
                    ],
                ),
            )
            .with_role(
                Role::ADMIN,
                RoleRoutes::new(
                    Screen::AdminProduct,
                    &[
                        Screen::AdminProduct,
                        Screen::AdminCategory,
                        Screen::Setting,
                        Screen::EditAccount,
                    ],
                ),
            )
    }
}
