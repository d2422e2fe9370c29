//! Three-step player registration
//!
//! Player info → emergency contact → tournament details. Each step only
//! gates on its required fields being non-empty. Submitting creates the
//! player (which logs them in), records a confirmed registration at the flat
//! fee and sends the player on to hotel booking.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{is_blank, non_empty, NextStage};
use crate::core::catalog::REGISTRATION_FEE;
use crate::error::{PortalError, PortalResult};
use crate::store::AppStore;
use crate::traits::KeyValueStore;
use shared::{
    component_info, BookingStatus, Component, EmergencyContact, Gender, Player, PlayerProfile,
    RecordId, RecordKind, Registration, ShirtSize, SkillLevel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    PlayerInfo,
    EmergencyContact,
    TournamentDetails,
}

impl RegistrationStep {
    pub const ALL: [RegistrationStep; 3] = [
        RegistrationStep::PlayerInfo,
        RegistrationStep::EmergencyContact,
        RegistrationStep::TournamentDetails,
    ];

    /// 1-based position shown in the progress bar
    pub fn number(&self) -> u8 {
        match self {
            RegistrationStep::PlayerInfo => 1,
            RegistrationStep::EmergencyContact => 2,
            RegistrationStep::TournamentDetails => 3,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            RegistrationStep::PlayerInfo => Some(RegistrationStep::EmergencyContact),
            RegistrationStep::EmergencyContact => Some(RegistrationStep::TournamentDetails),
            RegistrationStep::TournamentDetails => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            RegistrationStep::PlayerInfo => None,
            RegistrationStep::EmergencyContact => Some(RegistrationStep::PlayerInfo),
            RegistrationStep::TournamentDetails => Some(RegistrationStep::EmergencyContact),
        }
    }
}

/// Everything the registration screens collect
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub team_name: Option<String>,
    pub club_name: Option<String>,
    pub coach_name: Option<String>,
    pub emergency_name: String,
    pub emergency_phone: String,
    pub emergency_relationship: String,
    pub tournament_category: String,
    pub skill_level: Option<SkillLevel>,
    pub shirt_size: Option<ShirtSize>,
    pub medical_conditions: Option<String>,
    pub dietary_restrictions: Option<String>,
}

impl RegistrationForm {
    /// Names of the required fields of `step` that are still empty
    pub fn missing_fields(&self, step: RegistrationStep) -> Vec<&'static str> {
        let required: Vec<(&'static str, bool)> = match step {
            RegistrationStep::PlayerInfo => vec![
                ("name", is_blank(&self.name)),
                ("email", is_blank(&self.email)),
                ("phone", is_blank(&self.phone)),
                ("date_of_birth", is_blank(&self.date_of_birth)),
                ("gender", self.gender.is_none()),
            ],
            RegistrationStep::EmergencyContact => vec![
                ("emergency_name", is_blank(&self.emergency_name)),
                ("emergency_phone", is_blank(&self.emergency_phone)),
                ("emergency_relationship", is_blank(&self.emergency_relationship)),
            ],
            RegistrationStep::TournamentDetails => vec![
                ("tournament_category", is_blank(&self.tournament_category)),
                ("skill_level", self.skill_level.is_none()),
                ("shirt_size", self.shirt_size.is_none()),
            ],
        };

        required
            .into_iter()
            .filter_map(|(field, missing)| missing.then_some(field))
            .collect()
    }

    pub fn is_step_valid(&self, step: RegistrationStep) -> bool {
        self.missing_fields(step).is_empty()
    }

    /// Missing fields across every step
    pub fn validate(&self) -> PortalResult<()> {
        let missing: Vec<&'static str> = RegistrationStep::ALL
            .iter()
            .flat_map(|step| self.missing_fields(*step))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PortalError::incomplete(missing))
        }
    }

    fn profile(&self, gender: Gender) -> PlayerProfile {
        PlayerProfile {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            gender,
            team_name: non_empty(self.team_name.as_deref()),
            club_name: non_empty(self.club_name.as_deref()),
            coach_name: non_empty(self.coach_name.as_deref()),
            emergency_contact: EmergencyContact {
                name: self.emergency_name.trim().to_string(),
                phone: self.emergency_phone.trim().to_string(),
                relationship: self.emergency_relationship.trim().to_string(),
            },
        }
    }
}

/// Step navigation over a form being filled in
#[derive(Debug, Clone, Default)]
pub struct RegistrationWizard {
    step: Option<RegistrationStep>,
    pub form: RegistrationForm,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> RegistrationStep {
        self.step.unwrap_or(RegistrationStep::PlayerInfo)
    }

    /// Advance when the current step is complete; stays on the last step
    pub fn next(&mut self) -> PortalResult<RegistrationStep> {
        let current = self.step();
        let missing = self.form.missing_fields(current);
        if !missing.is_empty() {
            return Err(PortalError::incomplete(missing));
        }

        let next = current.next().unwrap_or(current);
        self.step = Some(next);
        Ok(next)
    }

    pub fn back(&mut self) -> RegistrationStep {
        let previous = self.step().previous().unwrap_or(RegistrationStep::PlayerInfo);
        self.step = Some(previous);
        previous
    }

    /// Submission is only offered on the final step
    pub fn can_submit(&self) -> bool {
        self.step() == RegistrationStep::TournamentDetails && self.form.validate().is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationOutcome {
    pub player: Player,
    pub registration: Registration,
    pub next_stage: NextStage,
}

/// Create the player, record their entry and log them in
pub async fn submit<K: KeyValueStore>(
    store: &AppStore<K>,
    form: &RegistrationForm,
) -> PortalResult<RegistrationOutcome> {
    form.validate()?;

    let (Some(gender), Some(skill_level), Some(shirt_size)) = (form.gender, form.skill_level, form.shirt_size)
    else {
        return Err(PortalError::incomplete(["gender", "skill_level", "shirt_size"]));
    };

    let player = store.auth().register(form.profile(gender)).await?;

    let registration = Registration {
        id: RecordId::generate(RecordKind::Registration),
        player_id: player.id.clone(),
        tournament_category: form.tournament_category.trim().to_string(),
        skill_level,
        shirt_size,
        medical_conditions: non_empty(form.medical_conditions.as_deref()),
        dietary_restrictions: non_empty(form.dietary_restrictions.as_deref()),
        amount: REGISTRATION_FEE,
        status: BookingStatus::Confirmed,
        created_at: Utc::now(),
    };

    // The new player is already logged in, even if the registration write fails
    let added = store.add_registration(registration.clone()).await;
    store.refresh_session().await;
    added?;

    component_info!(
        Component::Registration,
        "🏸 Registered {} for {} ({})",
        player.id,
        registration.tournament_category,
        registration.id
    );

    Ok(RegistrationOutcome {
        player,
        registration,
        next_stage: NextStage::BookHotel,
    })
}
