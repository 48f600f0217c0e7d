use super::CartCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedAccount, CartDto},
        error::ApplicationResult,
    },
    domain::catalog::ProductId,
};

pub struct RemoveItemCommand {
    pub product_id: i64,
}

impl CartCommandService {
    /// Removes the line if present; removing an absent line succeeds.
    pub async fn remove_item(
        &self,
        actor: &AuthenticatedAccount,
        command: RemoveItemCommand,
    ) -> ApplicationResult<CartDto> {
        ensure_capability(actor, "cart", "update")?;

        let product_id = ProductId::new(command.product_id)?;

        let cart = self.cart_repo.remove_line(actor.id, product_id).await?;

        Ok(cart.into())
    }
}
