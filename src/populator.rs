use super::criteria::COUNTRY_OPTIONS;
use super::grant_filter::GrantFilter;
use super::repository::Repository;
use super::ui::Ui;
use super::widgets::GrantRowWidget;

pub struct Populator {}

impl Populator {

    pub fn populate(ui: &Ui, repository: Repository, filter: &GrantFilter) {
        Self::populate_country_options(ui);
        Self::populate_discipline_options(ui, filter);
        Self::populate_grant_rows(ui, repository);

        tracing::debug!(
            grants = repository.len(),
            disciplines = filter.disciplines().len(),
            "populated listing"
        );
    }

    fn populate_country_options(ui: &Ui) {
        ui.grants_page().set_country_options(&COUNTRY_OPTIONS);
    }

    fn populate_discipline_options(ui: &Ui, filter: &GrantFilter) {
        ui.grants_page().set_discipline_options(filter.disciplines());
    }

    fn populate_grant_rows(ui: &Ui, repository: Repository) {
        let grants_page = ui.grants_page();
        for (index, grant) in repository.grants().iter().enumerate() {
            let row = GrantRowWidget::from_grant(grant, index);
            grants_page.append_row(row);
        }
    }
}
