use super::error::OrderError;
use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId};

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type Action = ();
    type ActionResult = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Freezes the cart snapshot into a submitted order.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.goods.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Order::submitted(id, params).ok_or(OrderError::TotalOverflow)
    }

    /// Submitted orders are terminal; nothing may change them.
    fn handle_action(&mut self, _action: ()) -> Result<(), OrderError> {
        Err(OrderError::Immutable(self.id))
    }
}
