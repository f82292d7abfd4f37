use std::cell::RefCell;
use std::rc::Rc;

use api::wallet::detect::DebugSnapshot;
use api::wallet::provider::EventKind;
use api::wallet::provider::ProviderNotification;
use api::wallet::session::Toast;
use api::wallet::session::WalletStatus;
use api::wallet::ConnectionState;
use api::wallet::Subscription;
use api::wallet::WalletAdapter;
use api::wallet::WalletSession;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use futures::StreamExt;
use strum::IntoEnumIterator;

use crate::injected;
use crate::injected::PlatformProvider;

type Session = WalletSession<PlatformProvider>;

/// The wallet state shared with every panel, plus the operations on it.
///
/// Provided once by [`use_wallet_provider`] and read with [`use_wallet`].
#[derive(Clone)]
pub struct WalletContext {
    session: Rc<Session>,
    pub state: Signal<ConnectionState>,
    pub toast: Signal<Option<Toast>>,
    /// Bumped on every provider event, so diagnostics can re-read the provider.
    pub revision: Signal<u64>,
}

impl PartialEq for WalletContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl WalletContext {
    pub fn status(&self) -> WalletStatus {
        self.state.read().status()
    }

    pub fn is_installed(&self) -> bool {
        self.session.adapter().is_installed()
    }

    fn sync(&mut self) {
        self.state.set(self.session.state());
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast.set(Some(toast));
    }

    /// Starts a connection attempt. Does nothing while one is in flight.
    pub fn connect(&self) {
        if self.state.peek().is_connecting() {
            return;
        }
        let mut ctx = self.clone();
        ctx.state.set(ConnectionState::Connecting);
        spawn(async move {
            let toast = ctx.session.connect().await;
            ctx.sync();
            ctx.show_toast(toast);
        });
    }

    pub fn disconnect(&self) {
        let mut ctx = self.clone();
        let toast = ctx.session.disconnect();
        ctx.sync();
        ctx.show_toast(toast);
    }

    /// Re-reads balance and chain; disconnects if that fails.
    pub fn refresh(&self) {
        let mut ctx = self.clone();
        spawn(async move {
            if let Some(toast) = ctx.session.refresh().await {
                ctx.show_toast(toast);
            }
            ctx.sync();
        });
    }

    pub fn debug_snapshot(&self) -> DebugSnapshot {
        injected::debug_snapshot(self.session.adapter().provider())
    }
}

/// Creates the wallet session for the lifetime of the calling component and
/// provides it as context.
///
/// Provider events are forwarded into a coroutine and applied in arrival
/// order. The listeners are detached when the component unmounts.
pub fn use_wallet_provider() -> WalletContext {
    let session = use_hook(|| Rc::new(WalletSession::new(WalletAdapter::new(injected::find_provider()))));
    let state = use_signal(|| session.state());
    let toast = use_signal(|| None);
    let revision = use_signal(|| 0u64);

    let ctx = use_context_provider(|| WalletContext {
        session: session.clone(),
        state,
        toast,
        revision,
    });

    let events = use_coroutine({
        let ctx = ctx.clone();
        move |mut rx: UnboundedReceiver<ProviderNotification>| {
            let mut ctx = ctx.clone();
            async move {
                while let Some(notification) = rx.next().await {
                    if let Some(toast) = ctx.session.handle_notification(notification).await {
                        ctx.show_toast(toast);
                    }
                    ctx.sync();
                    *ctx.revision.write() += 1;
                }
            }
        }
    });

    let subscriptions = use_hook(|| {
        let subscriptions: Vec<Subscription<PlatformProvider>> = EventKind::iter()
            .filter_map(|kind| {
                session
                    .adapter()
                    .subscribe(kind, move |notification| events.send(notification))
            })
            .collect();
        Rc::new(RefCell::new(subscriptions))
    });

    use_drop(move || {
        let count = subscriptions.borrow().len();
        subscriptions.borrow_mut().clear();
        info!("detached {count} provider listeners");
    });

    // reconnect silently if the page already holds a live signing context
    use_future({
        let ctx = ctx.clone();
        move || {
            let mut ctx = ctx.clone();
            async move {
                if ctx.session.restore().await.is_connected() {
                    ctx.sync();
                }
            }
        }
    });

    ctx
}

/// Returns the wallet context provided by an ancestor.
pub fn use_wallet() -> WalletContext {
    use_context::<WalletContext>()
}
