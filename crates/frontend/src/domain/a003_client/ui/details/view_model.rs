use super::model;
use crate::shared::geo_api;
use contracts::domain::a003_client::ClientDto;
use contracts::shared::geo::{GeoField, GeoRef};
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the client details form.
///
/// The geographic cascade (country -> state -> district -> pincode) refetches
/// each dependent reference list when its parent changes. `geo_epoch` is a
/// monotonic token: every cascade restart bumps it, and a fetch only applies
/// its result when the token is still the one it started with, so a slow
/// response for an abandoned selection cannot overwrite a newer one.
#[derive(Clone)]
pub struct ClientDetailsViewModel {
    pub form: RwSignal<ClientDto>,
    pub countries: RwSignal<Vec<GeoRef>>,
    pub states: RwSignal<Vec<GeoRef>>,
    pub districts: RwSignal<Vec<GeoRef>>,
    pub pincodes: RwSignal<Vec<GeoRef>>,
    pub error: RwSignal<Option<String>>,
    geo_epoch: RwSignal<u64>,
}

impl ClientDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ClientDto::default()),
            countries: RwSignal::new(Vec::new()),
            states: RwSignal::new(Vec::new()),
            districts: RwSignal::new(Vec::new()),
            pincodes: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            geo_epoch: RwSignal::new(0),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || !self.form.get().description.trim().is_empty()
    }

    /// Load the form (when an id is given) and run the initial cascade:
    /// fetch each level's options and reconcile the stored field against
    /// them, walking down only as far as the record resolves.
    pub fn load_if_needed(&self, id: Option<String>) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(existing_id) = id {
                match model::fetch_by_id(existing_id).await {
                    Ok(client) => {
                        let dto = ClientDto {
                            id: Some(client.to_string_id()),
                            code: Some(client.base.code.clone()),
                            description: client.base.description.clone(),
                            comment: client.base.comment.clone(),
                            contact_name: Some(client.contact_name.clone()),
                            phone: Some(client.phone.clone()),
                            email: Some(client.email.clone()),
                            geo: client.geo.clone(),
                            updated_at: Some(client.base.metadata.updated_at),
                        };
                        this.form.set(dto);
                    }
                    Err(e) => {
                        this.error.set(Some(format!("Load error: {}", e)));
                        return;
                    }
                }
            }
            this.reconcile_cascade().await;
        });
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Arc<dyn Fn(()) + Send + Sync>) {
        let current = self.form.get();

        if current.description.trim().is_empty() {
            self.error.set(Some("Name is required".to_string()));
            return;
        }

        let on_saved_cb = on_saved.clone();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(_id) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    pub fn select_country(&self, country_id: String) {
        let Some(country) = self
            .countries
            .get_untracked()
            .iter()
            .find(|r| r.id == country_id)
            .cloned()
        else {
            return;
        };
        self.form.update(|f| f.geo.set_country(&country));
        self.states.set(Vec::new());
        self.districts.set(Vec::new());
        self.pincodes.set(Vec::new());

        let epoch = self.bump_epoch();
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match geo_api::fetch_states(&country.id).await {
                Ok(list) if this.epoch_is(epoch) => this.states.set(list),
                Ok(_) => {}
                Err(e) => log::warn!("states load failed: {}", e),
            }
        });
    }

    pub fn select_state(&self, state_id: String) {
        let Some(state) = self
            .states
            .get_untracked()
            .iter()
            .find(|r| r.id == state_id)
            .cloned()
        else {
            return;
        };
        self.form.update(|f| f.geo.set_state(&state));
        self.districts.set(Vec::new());
        self.pincodes.set(Vec::new());

        let epoch = self.bump_epoch();
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match geo_api::fetch_districts(&state.id).await {
                Ok(list) if this.epoch_is(epoch) => this.districts.set(list),
                Ok(_) => {}
                Err(e) => log::warn!("districts load failed: {}", e),
            }
        });
    }

    pub fn select_district(&self, district_id: String) {
        let Some(district) = self
            .districts
            .get_untracked()
            .iter()
            .find(|r| r.id == district_id)
            .cloned()
        else {
            return;
        };
        self.form.update(|f| f.geo.set_district(&district));
        self.pincodes.set(Vec::new());

        let epoch = self.bump_epoch();
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match geo_api::fetch_pincodes(&district.id).await {
                Ok(list) if this.epoch_is(epoch) => this.pincodes.set(list),
                Ok(_) => {}
                Err(e) => log::warn!("pincodes load failed: {}", e),
            }
        });
    }

    pub fn select_pincode(&self, pincode_id: String) {
        let Some(pincode) = self
            .pincodes
            .get_untracked()
            .iter()
            .find(|r| r.id == pincode_id)
            .cloned()
        else {
            return;
        };
        self.form.update(|f| f.geo.set_pincode(&pincode));
    }

    /// Walk the hierarchy top-down, resolving each stored field against the
    /// fetched options. Legacy records that carry only names get their ids
    /// backfilled; fields that no longer resolve stay as stored so they are
    /// not silently dropped on save.
    async fn reconcile_cascade(&self) {
        let epoch = self.bump_epoch();

        let countries = match geo_api::fetch_countries().await {
            Ok(list) => list,
            Err(e) => {
                log::warn!("countries load failed: {}", e);
                return;
            }
        };
        if !self.epoch_is(epoch) {
            return;
        }
        self.countries.set(countries.clone());

        let Some(country) = self.form.get_untracked().geo.country.resolve(&countries).cloned()
        else {
            return;
        };
        self.form
            .update(|f| f.geo.country = GeoField::from_ref(&country));

        let states = match geo_api::fetch_states(&country.id).await {
            Ok(list) => list,
            Err(e) => {
                log::warn!("states load failed: {}", e);
                return;
            }
        };
        if !self.epoch_is(epoch) {
            return;
        }
        self.states.set(states.clone());

        let Some(state) = self.form.get_untracked().geo.state.resolve(&states).cloned() else {
            return;
        };
        self.form
            .update(|f| f.geo.state = GeoField::from_ref(&state));

        let districts = match geo_api::fetch_districts(&state.id).await {
            Ok(list) => list,
            Err(e) => {
                log::warn!("districts load failed: {}", e);
                return;
            }
        };
        if !self.epoch_is(epoch) {
            return;
        }
        self.districts.set(districts.clone());

        let Some(district) = self
            .form
            .get_untracked()
            .geo
            .district
            .resolve(&districts)
            .cloned()
        else {
            return;
        };
        self.form
            .update(|f| f.geo.district = GeoField::from_ref(&district));

        let pincodes = match geo_api::fetch_pincodes(&district.id).await {
            Ok(list) => list,
            Err(e) => {
                log::warn!("pincodes load failed: {}", e);
                return;
            }
        };
        if !self.epoch_is(epoch) {
            return;
        }
        self.pincodes.set(pincodes.clone());

        if let Some(pincode) = self
            .form
            .get_untracked()
            .geo
            .pincode
            .resolve(&pincodes)
            .cloned()
        {
            self.form
                .update(|f| f.geo.pincode = GeoField::from_ref(&pincode));
        }
    }

    fn bump_epoch(&self) -> u64 {
        let next = self.geo_epoch.get_untracked() + 1;
        self.geo_epoch.set(next);
        next
    }

    fn epoch_is(&self, epoch: u64) -> bool {
        self.geo_epoch.get_untracked() == epoch
    }
}
