mod add_item;
mod remove_item;
mod service;
mod update_quantity;

pub use add_item::AddItemCommand;
pub use remove_item::RemoveItemCommand;
pub use service::CartCommandService;
pub use update_quantity::UpdateQuantityCommand;
