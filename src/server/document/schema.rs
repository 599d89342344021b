//! Typed default configuration for a guild.
//!
//! [`GuildSettings::default()`] is the single source of truth for the shape of a guild's
//! configuration. [`defaults()`] turns it into a [`ConfigNode`] tree that stored overrides
//! are merged over.

use serde::{Deserialize, Serialize};

use crate::server::document::node::ConfigNode;

/// Returns a freshly built default configuration tree.
///
/// Every call constructs a new, independent tree; callers are free to mutate the result.
pub fn defaults() -> ConfigNode {
    GuildSettings::default().into_node()
}

/// Root of a guild's configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildSettings {
    pub features: FeatureSettings,
}

impl GuildSettings {
    /// Converts the typed settings into a document tree.
    pub fn into_node(self) -> ConfigNode {
        // Struct field names are the only map keys, so serialization cannot fail.
        serde_json::to_value(self)
            .map(ConfigNode::from)
            .unwrap_or_else(|_| ConfigNode::empty_object())
    }

    /// Reads typed settings back out of a document tree.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Every schema path is present with the expected type
    /// - `Err(serde_json::Error)` - A schema path is missing or holds a value of the wrong type
    pub fn from_node(node: ConfigNode) -> Result<Self, serde_json::Error> {
        serde_json::from_value(node.into())
    }
}

/// Per-feature configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSettings {
    pub moderation: ModerationSettings,
    pub automod: AutomodSettings,
    pub logging: LoggingSettings,
    pub security: SecuritySettings,
    pub tickets: TicketSettings,
    pub welcomer: WelcomerSettings,
    pub giveaways: GiveawaySettings,
}

/// Enabled flag for a command or feature without further options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    pub enabled: bool,
}

impl Toggle {
    pub fn on() -> Self {
        Self { enabled: true }
    }
}

/// Action taken against a member by moderation or automod.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModAction {
    #[default]
    Delete,
    Warn,
    Timeout,
    Kick,
    Ban,
}

/// Response to a detected raid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaidAction {
    #[default]
    Lockdown,
    Kick,
    Ban,
}

/// How new members prove they are human.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    #[default]
    Button,
    Captcha,
    Reaction,
}

/// How a filter rule's pattern is matched against message content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    #[default]
    Word,
    Regex,
    Link,
}

/// Background used for rendered welcome cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBackground {
    #[default]
    Default,
    Dark,
    Light,
}

/// A single automod filter: a pattern and what to do when it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    pub pattern: String,
    pub kind: FilterKind,
    pub action: ModAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationSettings {
    pub enabled: bool,
    pub mod_role: Option<String>,
    pub dm_on_action: bool,
    pub purge: PurgeSettings,
    pub slowmode: SlowmodeSettings,
    pub kick: Toggle,
    pub ban: BanSettings,
    pub timeout: TimeoutSettings,
    pub warn: Toggle,
    pub lock: Toggle,
}

impl Default for ModerationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mod_role: None,
            dm_on_action: true,
            purge: PurgeSettings {
                enabled: true,
                max_messages: 100,
            },
            slowmode: SlowmodeSettings {
                enabled: true,
                max_seconds: 21_600,
            },
            kick: Toggle::on(),
            ban: BanSettings {
                enabled: true,
                delete_message_days: 1,
            },
            timeout: TimeoutSettings {
                enabled: true,
                max_minutes: 40_320,
            },
            warn: Toggle::on(),
            lock: Toggle::on(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeSettings {
    pub enabled: bool,
    pub max_messages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlowmodeSettings {
    pub enabled: bool,
    pub max_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanSettings {
    pub enabled: bool,
    pub delete_message_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutSettings {
    pub enabled: bool,
    pub max_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomodSettings {
    pub enabled: bool,
    pub anti_spam: AntiSpamSettings,
    pub anti_invite: ActionToggle,
    pub anti_link: AntiLinkSettings,
    pub mass_mention: MassMentionSettings,
    pub escalation: EscalationSettings,
    pub filters: Vec<FilterRule>,
    pub exempt_roles: Vec<String>,
    pub exempt_channels: Vec<String>,
}

impl Default for AutomodSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            anti_spam: AntiSpamSettings {
                enabled: false,
                max_messages: 5,
                interval_seconds: 5,
                action: ModAction::Timeout,
            },
            anti_invite: ActionToggle {
                enabled: false,
                action: ModAction::Delete,
            },
            anti_link: AntiLinkSettings {
                enabled: false,
                action: ModAction::Delete,
                allowed_domains: Vec::new(),
            },
            mass_mention: MassMentionSettings {
                enabled: false,
                max_mentions: 5,
                action: ModAction::Warn,
            },
            escalation: EscalationSettings {
                enabled: false,
                warn_threshold: 3,
                timeout_threshold: 5,
                kick_threshold: 7,
                ban_threshold: 10,
                timeout_minutes: 10,
            },
            filters: Vec::new(),
            exempt_roles: Vec::new(),
            exempt_channels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionToggle {
    pub enabled: bool,
    pub action: ModAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiSpamSettings {
    pub enabled: bool,
    pub max_messages: u32,
    pub interval_seconds: u32,
    pub action: ModAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiLinkSettings {
    pub enabled: bool,
    pub action: ModAction,
    pub allowed_domains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassMentionSettings {
    pub enabled: bool,
    pub max_mentions: u32,
    pub action: ModAction,
}

/// Infraction counts at which automod escalates its response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationSettings {
    pub enabled: bool,
    pub warn_threshold: u32,
    pub timeout_threshold: u32,
    pub kick_threshold: u32,
    pub ban_threshold: u32,
    pub timeout_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub enabled: bool,
    pub message_channel: Option<String>,
    pub member_channel: Option<String>,
    pub moderation_channel: Option<String>,
    pub server_channel: Option<String>,
    pub voice_channel: Option<String>,
    pub events: LogEventSettings,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            message_channel: None,
            member_channel: None,
            moderation_channel: None,
            server_channel: None,
            voice_channel: None,
            events: LogEventSettings {
                message_delete: true,
                message_edit: true,
                member_join: true,
                member_leave: true,
                role_changes: true,
                channel_changes: true,
                voice_activity: false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEventSettings {
    pub message_delete: bool,
    pub message_edit: bool,
    pub member_join: bool,
    pub member_leave: bool,
    pub role_changes: bool,
    pub channel_changes: bool,
    pub voice_activity: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub anti_raid: AntiRaidSettings,
    pub anti_nuke: AntiNukeSettings,
    pub verification: VerificationSettings,
    pub account_age: AccountAgeSettings,
    pub quarantine_role: Option<String>,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            anti_raid: AntiRaidSettings {
                enabled: false,
                join_threshold: 10,
                interval_seconds: 10,
                action: RaidAction::Lockdown,
            },
            anti_nuke: AntiNukeSettings {
                enabled: false,
                channel_delete_threshold: 3,
                role_delete_threshold: 3,
                ban_threshold: 5,
                interval_seconds: 60,
            },
            verification: VerificationSettings {
                enabled: false,
                role: None,
                channel: None,
                method: VerificationMethod::Button,
            },
            account_age: AccountAgeSettings {
                enabled: false,
                min_days: 7,
                action: ModAction::Kick,
            },
            quarantine_role: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiRaidSettings {
    pub enabled: bool,
    pub join_threshold: u32,
    pub interval_seconds: u32,
    pub action: RaidAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiNukeSettings {
    pub enabled: bool,
    pub channel_delete_threshold: u32,
    pub role_delete_threshold: u32,
    pub ban_threshold: u32,
    pub interval_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSettings {
    pub enabled: bool,
    pub role: Option<String>,
    pub channel: Option<String>,
    pub method: VerificationMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAgeSettings {
    pub enabled: bool,
    pub min_days: u32,
    pub action: ModAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSettings {
    pub enabled: bool,
    pub category: Option<String>,
    pub support_role: Option<String>,
    pub log_channel: Option<String>,
    pub max_open_per_user: u32,
    pub transcripts: bool,
    pub welcome_message: String,
}

impl Default for TicketSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            category: None,
            support_role: None,
            log_channel: None,
            max_open_per_user: 1,
            transcripts: true,
            welcome_message: "Thanks for reaching out! A member of staff will be with you shortly."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomerSettings {
    pub enabled: bool,
    pub channel: Option<String>,
    pub message: String,
    pub auto_role: Option<String>,
    pub dm: DirectMessageSettings,
    pub card: CardSettings,
    pub leave: LeaveSettings,
}

impl Default for WelcomerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            channel: None,
            message: "Welcome {user} to {server}!".to_string(),
            auto_role: None,
            dm: DirectMessageSettings {
                enabled: false,
                message: "Welcome to {server}, {user}!".to_string(),
            },
            card: CardSettings {
                enabled: false,
                background: CardBackground::Default,
            },
            leave: LeaveSettings {
                enabled: false,
                channel: None,
                message: "{user} has left the server.".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessageSettings {
    pub enabled: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSettings {
    pub enabled: bool,
    pub background: CardBackground,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSettings {
    pub enabled: bool,
    pub channel: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiveawaySettings {
    pub enabled: bool,
    pub manager_role: Option<String>,
    pub default_duration_minutes: u32,
    pub max_winners: u32,
}

impl Default for GiveawaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            manager_role: None,
            default_duration_minutes: 1440,
            max_winners: 10,
        }
    }
}
