use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Divider,

    // Fixed header / navigation
    HeaderBackground,
    NavActive,
    NavInactive,
    Brand,

    // Content cards
    Card,
    CardBorder,
    CardBorderAccent,

    // Text tiers
    TextPrimary,
    TextSecondary,
    TextMuted,

    // Accents
    Accent,
    AccentSoft,

    // Technology / coursework chips
    ChipBackground,
    ChipText,
}
