use super::CartCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedAccount, CartDto},
        error::ApplicationResult,
    },
    domain::{cart::Quantity, catalog::ProductId},
};

pub struct AddItemCommand {
    pub product_id: i64,
    pub quantity: u32,
}

impl CartCommandService {
    /// Append-or-increment: if the product is already in the cart its
    /// quantity grows by the given amount, otherwise a new line is appended.
    /// The increment happens in a single store operation, so two concurrent
    /// adds for the same account never lose an update.
    pub async fn add_item(
        &self,
        actor: &AuthenticatedAccount,
        command: AddItemCommand,
    ) -> ApplicationResult<CartDto> {
        ensure_capability(actor, "cart", "update")?;

        let product_id = ProductId::new(command.product_id)?;
        let quantity = Quantity::new(command.quantity)?;

        let cart = self
            .cart_repo
            .upsert_increment(actor.id, product_id, quantity)
            .await?;

        Ok(cart.into())
    }
}
