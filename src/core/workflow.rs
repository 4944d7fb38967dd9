//! Craving-logging workflow.
//!
//! `SessionWorkflow` is the whole per-session record. Each command consumes
//! the current record and returns a `Transition` carrying its replacement
//! plus the notices to show. Only `Choose` writes, and only from
//! `AwaitingAction`; rendering (`view`) never touches the gateway.

use crate::core::insights::Insights;
use crate::core::suggest::{self, Suggestions};
use crate::errors::AppError;
use crate::gateway::{AuthOutcome, Gateway, Repository, SaveOutcome};
use crate::models::{CravingEvent, Identity, NewCravingEvent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WorkflowState {
    #[default]
    Idle,
    AwaitingAction {
        craving: String,
    },
}

impl WorkflowState {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::AwaitingAction { .. } => "awaiting an action",
        }
    }

    pub fn craving(&self) -> Option<&str> {
        match self {
            WorkflowState::Idle => None,
            WorkflowState::AwaitingAction { craving } => Some(craving),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionWorkflow {
    #[serde(default)]
    pub draft: String,
    #[serde(default)]
    pub state: WorkflowState,
    #[serde(default)]
    pub identity: Option<Identity>,
    /// Client-side copy of the owner's events, newest first. Always re-derivable.
    #[serde(skip)]
    pub history: Vec<CravingEvent>,
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetDraft(String),
    /// Submit the given text, or the stored draft when `None`.
    Submit(Option<String>),
    Choose {
        action: String,
        did_eat_craved: bool,
    },
    Cancel,
    ClearInput,
    Refresh,
    Register {
        email: String,
        password: String,
        confirm: String,
    },
    SignIn {
        email: String,
        password: String,
    },
    SignOut,
}

#[derive(Debug)]
pub enum Notice {
    Success(String),
    Info(String),
    Problem(AppError),
}

#[derive(Debug)]
pub struct Transition {
    pub workflow: SessionWorkflow,
    pub notices: Vec<Notice>,
}

impl Transition {
    fn to(workflow: SessionWorkflow) -> Self {
        Self {
            workflow,
            notices: Vec::new(),
        }
    }

    fn rejected(workflow: SessionWorkflow, err: AppError) -> Self {
        Self {
            workflow,
            notices: vec![Notice::Problem(err)],
        }
    }

    fn notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn problems(&self) -> impl Iterator<Item = &AppError> {
        self.notices.iter().filter_map(|n| match n {
            Notice::Problem(e) => Some(e),
            _ => None,
        })
    }
}

/// Pure projection of the workflow for display.
#[derive(Debug)]
pub struct View<'a> {
    pub state: &'a WorkflowState,
    pub draft: &'a str,
    pub identity: Option<&'a Identity>,
    pub suggestions: Option<Suggestions>,
    pub history: &'a [CravingEvent],
    pub insights: Insights,
}

impl SessionWorkflow {
    pub fn new(identity: Option<Identity>) -> Self {
        Self {
            identity,
            ..Self::default()
        }
    }

    pub fn owner(&self) -> Option<i64> {
        self.identity.as_ref().map(|i| i.id)
    }

    pub fn view(&self) -> View<'_> {
        View {
            state: &self.state,
            draft: &self.draft,
            identity: self.identity.as_ref(),
            suggestions: self.state.craving().map(suggest::suggest),
            history: &self.history,
            insights: Insights::from_history(&self.history),
        }
    }

    /// Dispatch one command to its transition.
    pub fn apply<R: Repository>(self, command: Command, gateway: &mut Gateway<R>) -> Transition {
        match command {
            Command::SetDraft(text) => self.set_draft(text),
            Command::Submit(text) => self.submit_craving(text),
            Command::Choose {
                action,
                did_eat_craved,
            } => self.choose_action(&action, did_eat_craved, gateway),
            Command::Cancel => self.cancel(),
            Command::ClearInput => self.clear_input(),
            Command::Refresh => self.refresh(gateway),
            Command::Register {
                email,
                password,
                confirm,
            } => {
                let outcome = gateway.register(&email, &password, &confirm);
                self.signed_in(outcome, gateway, "Account created")
            }
            Command::SignIn { email, password } => {
                let outcome = gateway.authenticate(&email, &password);
                self.signed_in(outcome, gateway, "Welcome back")
            }
            Command::SignOut => self.sign_out(gateway),
        }
    }

    pub fn set_draft(self, text: String) -> Transition {
        Transition::to(Self {
            draft: text,
            ..self
        })
    }

    pub fn submit_craving(self, text: Option<String>) -> Transition {
        if let WorkflowState::AwaitingAction { .. } = self.state {
            return Transition::rejected(
                self,
                AppError::InvalidTransition {
                    command: "log a new craving",
                    state: "another one is awaiting an action",
                },
            );
        }

        let text = text.unwrap_or_else(|| self.draft.clone());
        let craving = text.trim();
        if craving.is_empty() {
            return Transition::rejected(
                self,
                AppError::Validation("Please enter a craving first".to_string()),
            );
        }

        let notice = Notice::Info(format!("What will you do about {craving}?"));
        Transition::to(Self {
            draft: String::new(),
            state: WorkflowState::AwaitingAction {
                craving: craving.to_string(),
            },
            ..self
        })
        .notice(notice)
    }

    pub fn choose_action<R: Repository>(
        self,
        action: &str,
        did_eat_craved: bool,
        gateway: &mut Gateway<R>,
    ) -> Transition {
        let Some(craving) = self.state.craving().map(str::to_string) else {
            return Transition::rejected(
                self,
                AppError::InvalidTransition {
                    command: "choose an action",
                    state: "no craving is logged",
                },
            );
        };

        let action = action.trim();
        if action.is_empty() {
            return Transition::rejected(
                self,
                AppError::Validation("Please choose or type an action".to_string()),
            );
        }

        let event = NewCravingEvent::new(self.owner(), &craving, action, did_eat_craved);
        let saved = match gateway.insert_event(event) {
            SaveOutcome::Saved(ev) => ev,
            SaveOutcome::NotSaved(e) => return Transition::rejected(self, e),
        };

        let message = match (saved.did_eat_craved, suggest::tip_for(&saved.action_taken)) {
            (true, _) => format!("Saved. You had the {craving}, tomorrow is another try"),
            (false, Some(tip)) => format!("Saved! {tip}"),
            (false, None) => format!("Saved! {} instead of {craving}", saved.action_taken),
        };

        Self {
            state: WorkflowState::Idle,
            ..self
        }
        .refresh(gateway)
        .notice(Notice::Success(message))
    }

    pub fn cancel(self) -> Transition {
        match self.state {
            WorkflowState::AwaitingAction { .. } => Transition::to(Self {
                state: WorkflowState::Idle,
                ..self
            })
            .notice(Notice::Info("Craving discarded".to_string())),
            WorkflowState::Idle => Transition::rejected(
                self,
                AppError::InvalidTransition {
                    command: "cancel",
                    state: "no craving is logged",
                },
            ),
        }
    }

    pub fn clear_input(self) -> Transition {
        Transition::to(Self {
            draft: String::new(),
            ..self
        })
    }

    pub fn refresh<R: Repository>(self, gateway: &mut Gateway<R>) -> Transition {
        let fetched = gateway.list_events(self.owner());
        let transition = Transition::to(Self {
            history: fetched.events,
            ..self
        });
        match fetched.error {
            Some(e) => transition.notice(Notice::Problem(e)),
            None => transition,
        }
    }

    fn signed_in<R: Repository>(
        self,
        outcome: AuthOutcome,
        gateway: &mut Gateway<R>,
        greeting: &str,
    ) -> Transition {
        match outcome {
            AuthOutcome::SignedIn(identity) => {
                let message = format!("{greeting}, {}", identity.email);
                Self {
                    identity: Some(identity),
                    ..self
                }
                .refresh(gateway)
                .notice(Notice::Success(message))
            }
            AuthOutcome::Rejected(e) => Transition::rejected(self, e),
        }
    }

    /// Drops the identity and reloads the anonymous history. The draft is kept;
    /// a craving still awaiting its action must be saved or cancelled first.
    fn sign_out<R: Repository>(self, gateway: &mut Gateway<R>) -> Transition {
        if let WorkflowState::AwaitingAction { .. } = self.state {
            return Transition::rejected(
                self,
                AppError::InvalidTransition {
                    command: "sign out",
                    state: "a craving is awaiting an action",
                },
            );
        }

        let Some(identity) = self.identity.clone() else {
            return Transition::rejected(
                self,
                AppError::InvalidTransition {
                    command: "sign out",
                    state: "not signed in",
                },
            );
        };

        gateway.sign_out(&identity);
        Self {
            identity: None,
            history: Vec::new(),
            ..self
        }
        .refresh(gateway)
        .notice(Notice::Success(format!("Signed out {}", identity.email)))
    }
}
