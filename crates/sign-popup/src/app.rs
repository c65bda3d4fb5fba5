//! Popup shell: owns the adapters, the mounted sign page, and the glue between
//! page window requests and the egui viewport.

use std::time::Duration;

use eframe::egui;
use sign_popup_adapters::{
    BackgroundAdapter, ChainStoreAdapter, PopupConfig, WindowAdapter, WindowCommand,
};
use sign_popup_core::{SignPage, SignRoute};

use crate::demo;
use crate::sign_ui;

pub type PopupPage = SignPage<BackgroundAdapter, ChainStoreAdapter, WindowAdapter>;

enum Screen {
    /// List of pending requests, reached by going back from an in-app page.
    Pending,
    Sign(PopupPage),
}

pub struct App {
    screen: Screen,
    background: BackgroundAdapter,
    chains: ChainStoreAdapter,
    window: WindowAdapter,
    config: PopupConfig,
    notice: Option<String>,
}

impl App {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: PopupConfig,
        location: Option<String>,
    ) -> Self {
        let mut app = Self {
            screen: Screen::Pending,
            background: BackgroundAdapter::in_memory(),
            chains: ChainStoreAdapter::with_chains(config.chain_infos()),
            window: WindowAdapter::default(),
            config,
            notice: None,
        };

        let location = match location {
            Some(location) => location,
            None => match demo::seed(&app.background) {
                Ok(index) => SignRoute::new(index, true).to_location(),
                Err(e) => {
                    tracing::warn!(error = %e, "seeding demo requests failed");
                    app.notice = Some(format!("demo seeding failed: {e}"));
                    return app;
                }
            },
        };

        match SignRoute::parse(&location) {
            Ok(route) => app.open(route),
            Err(e) => {
                tracing::warn!(%location, error = %e, "cannot open location");
                app.notice = Some(e.to_string());
            }
        }
        app
    }

    fn open(&mut self, route: SignRoute) {
        self.leave_page();
        self.notice = None;
        self.screen = Screen::Sign(SignPage::mount(
            route,
            self.background.clone(),
            self.chains.clone(),
            self.window.clone(),
            self.config.page_options(),
        ));
    }

    fn leave_page(&mut self) {
        if let Screen::Sign(page) = std::mem::replace(&mut self.screen, Screen::Pending) {
            page.unmount();
        }
    }

    fn apply_window_commands(&mut self, ctx: &egui::Context) {
        let commands = match self.window.take_commands() {
            Ok(commands) => commands,
            Err(e) => {
                tracing::warn!(error = %e, "reading window commands failed");
                return;
            }
        };
        for command in commands {
            match command {
                WindowCommand::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                WindowCommand::GoBack => self.leave_page(),
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());
        let poll = Duration::from_millis(self.config.refresh_interval_ms);

        let mut next_route = None;
        match &mut self.screen {
            Screen::Sign(page) => {
                if page.snapshot().initializing {
                    page.refresh();
                    ctx.request_repaint_after(poll);
                }
                sign_ui::render_sign_page(ctx, page);
            }
            Screen::Pending => {
                next_route = sign_ui::render_pending(ctx, &self.background, self.notice.as_deref());
                ctx.request_repaint_after(poll);
            }
        }

        if let Some(route) = next_route {
            self.open(route);
        }
        self.apply_window_commands(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Screen::Sign(page) = &mut self.screen {
            page.on_unload();
        }
        self.leave_page();
    }
}
