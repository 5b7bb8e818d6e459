use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::constants;
use super::controllers::{
    ActionsController,
    DetailRowActivationController,
    FilterController,
    GrantActivationController,
    RouterController
};
use super::grant_filter::GrantFilter;
use super::populator::Populator;
use super::repository::Repository;
use super::route::Route;
use super::ui::Ui;
use super::widgets::WindowWidget;

/// Keeps the window and everything listening to it alive.
struct Controllers {
    ui: Ui,
    router: RouterController,
    _filter: FilterController,
    _grant_activation: GrantActivationController,
    _detail_row_activation: DetailRowActivationController,
    _actions: ActionsController,
}

struct ApplicationState {
    application: adw::Application,
    repository: Repository<'static>,
    filter: GrantFilter,
    controllers: RefCell<Option<Controllers>>,
    requested_route: RefCell<Option<Route>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new() -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            gtk::gio::ApplicationFlags::HANDLES_COMMAND_LINE
        );

        let repository = Repository::new(&constants::APP_CATALOG);
        let filter = GrantFilter::new(repository);
        let state = Rc::new(ApplicationState {
            application,
            repository,
            filter,
            controllers: RefCell::new(None),
            requested_route: RefCell::new(None),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_startup_event(state);
        Self::setup_command_line_event(state);
        Self::setup_activate_event(state);
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |application| {
            if let Err(error) = Self::setup_resources() {
                tracing::error!("{error:#}");
                application.quit();
            }
        });
    }

    /// The first argument, when present, is a location such as
    /// `/grants?country=UK` or `/grants/emerging-artist-fund`.
    fn setup_command_line_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_command_line(move |application, command_line| {
            if let Some(state) = state_weak.upgrade() {
                let route = command_line
                    .arguments()
                    .get(1)
                    .map(|location| Route::parse(&location.to_string_lossy()));
                *state.requested_route.borrow_mut() = route;
            }
            application.activate();
            glib::ExitCode::SUCCESS
        });
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            if let Err(error) = this.present() {
                tracing::error!("{error:#}");
            }
        });
    }

    fn present(&self) -> Result<()> {
        let route = self.state.requested_route.take();

        if self.state.controllers.borrow().is_none() {
            let controllers = self.setup_ui()?;
            self.state.controllers.replace(Some(controllers));
        }

        let controllers = self.state.controllers.borrow();
        let controllers = controllers.as_ref().context("Window was not created")?;
        controllers.ui.window().present();
        if let Some(route) = route {
            controllers.router.open(&route);
        }

        Ok(())
    }

    fn setup_ui(&self) -> Result<Controllers> {
        let window = WindowWidget::new(&self.state.application);
        window.set_title(Some(constants::APP_TITLE));

        let ui = Ui::new(window);
        Populator::populate(&ui, self.state.repository, &self.state.filter);
        ui.activate();

        let router = RouterController::new(ui.clone(), self.state.repository);
        let filter = FilterController::new(ui.clone(), self.state.filter.clone());
        let grant_activation = GrantActivationController::new(ui.clone(), router.clone());
        let detail_row_activation = DetailRowActivationController::new(ui.clone());
        let actions = ActionsController::new(self.state.application.clone(), ui.clone(), filter.clone());

        tracing::info!(grants = self.state.repository.len(), "window ready");

        Ok(Controllers {
            ui,
            router,
            _filter: filter,
            _grant_activation: grant_activation,
            _detail_row_activation: detail_row_activation,
            _actions: actions,
        })
    }

    fn setup_resources() -> Result<()> {
        glib::set_application_name(constants::APP_TITLE);
        glib::set_prgname(Some(constants::APP_NAME));
        gtk::gio::resources_register_include_impl(constants::APP_RESOURCES)
            .context("Failed to register resources")?;

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(&format!("{}/style.css", constants::APP_PREFIX));

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        tracing::info!(
            id = constants::APP_ID,
            version = constants::APP_VERSION,
            grants = self.state.repository.len(),
            "starting {}",
            constants::APP_TITLE
        );

        let result = self.state.application.run();
        if matches!(result, glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}
