pub(crate) mod assistant_fab;
pub(crate) mod card;
pub(crate) mod modal;
pub(crate) mod onboarding;
pub(crate) mod persona_controls;
pub(crate) mod search;
pub(crate) mod sensitive_field;
pub(crate) mod success_card;
pub(crate) mod tutorial;
pub(crate) mod urgent_alert;
pub(crate) mod widgets;

// Re-export components for convenience
pub use assistant_fab::AssistantFab;
pub use card::Card;
pub use modal::Modal;
pub use onboarding::OnboardingChecklist;
pub use persona_controls::PersonaControls;
pub use search::GlobalSearch;
pub use sensitive_field::SensitiveField;
pub use success_card::SuccessCard;
pub use tutorial::TutorialOverlay;
pub use urgent_alert::UrgentAlert;
