use super::CartCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedAccount, CartDto},
        error::ApplicationResult,
    },
    domain::{cart::Quantity, catalog::ProductId},
};

pub struct UpdateQuantityCommand {
    pub product_id: i64,
    pub quantity: u32,
}

impl CartCommandService {
    /// Sets a line's quantity exactly. A quantity below 1 is rejected, not
    /// silently floored; an absent line is `NotFound`.
    pub async fn update_quantity(
        &self,
        actor: &AuthenticatedAccount,
        command: UpdateQuantityCommand,
    ) -> ApplicationResult<CartDto> {
        ensure_capability(actor, "cart", "update")?;

        let product_id = ProductId::new(command.product_id)?;
        let quantity = Quantity::new(command.quantity)?;

        let cart = self
            .cart_repo
            .set_quantity(actor.id, product_id, quantity)
            .await?;

        Ok(cart.into())
    }
}
