use crate::adapters::{ButtonPressListener, SerenityGuildResolver};
use crate::bridge::interaction_router::InteractionRouter;
use serenity::async_trait;
use serenity::client::{Context, RawEventHandler};
use serenity::model::event::Event;
use std::sync::Arc;
use tracing::error;

/// Serenity raw event handler that turns component interactions into
/// `button_press` events
///
/// Sees every gateway event; anything that is not a component interaction
/// is ignored. Failures are logged and never stop the event loop.
pub struct ButtonEventHandler<L>
where
    L: ButtonPressListener,
{
    listener: Arc<L>,
}

impl<L> ButtonEventHandler<L>
where
    L: ButtonPressListener,
{
    pub fn new(listener: Arc<L>) -> Self {
        Self { listener }
    }
}

#[async_trait]
impl<L> RawEventHandler for ButtonEventHandler<L>
where
    L: ButtonPressListener + 'static,
{
    async fn raw_event(&self, ctx: Context, event: Event) {
        if !matches!(event, Event::InteractionCreate(_)) {
            return;
        }

        let resolver = Arc::new(SerenityGuildResolver::new(ctx.cache.clone(), ctx.http.clone()));
        let router = InteractionRouter::new(resolver, self.listener.clone());

        if let Err(err) = router.route_event(&event).await {
            error!(?err, "Failed to handle button press");
        }
    }
}
