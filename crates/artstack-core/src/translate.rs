//! Static translation and display tables for the catalog.
//!
//! The raw document carries Hungarian description strings and machine
//! subgroup keys; these tables map both to English display values.
//! Lookup is exact-string only: anything absent from a table passes
//! through verbatim (descriptions, names) or falls back to a documented
//! default (descriptions of unknown subgroups are empty, images fall back
//! per top-level group).

use crate::defaults::{DEFAULT_AI_IMAGE, DEFAULT_CREATIVE_IMAGE};
use crate::models::CategoryMain;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static SUBGROUP_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("video_templates", "Video Templates"),
        ("luts_transitions_overlays", "LUTs, Transitions & Overlays"),
        ("canva_psd_figma_templates", "Design Templates"),
        ("fonts", "Fonts"),
        ("sound_fx_music", "Audio & Music"),
        ("3d_models", "3D Models"),
        ("icons_svg", "Icons & SVG"),
        ("social_media_templates", "Social Media Templates"),
        ("ai_image_generators", "AI Image Generators"),
        ("ai_video_tools", "AI Video Tools"),
        ("ai_voice_cloning_tts", "AI Voice & TTS"),
        ("ai_music_generators", "AI Music Generators"),
        ("ai_face_animator", "AI Face Animators"),
        ("ai_caption_script_writers", "AI Caption & Script Writers"),
        ("ai_background_remover", "AI Background Removers"),
        ("ai_social_media_designers", "AI Social Media Designers"),
    ])
});

static SUBGROUP_DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "video_templates",
            "Professional video templates for Premiere Pro, After Effects, and DaVinci Resolve",
        ),
        (
            "luts_transitions_overlays",
            "Color grading LUTs, smooth transitions, and creative overlays",
        ),
        (
            "canva_psd_figma_templates",
            "Ready-to-use design templates for Canva, Photoshop, and Figma",
        ),
        ("fonts", "High-quality typography and fonts for creative projects"),
        ("sound_fx_music", "Royalty-free sound effects and background music"),
        ("3d_models", "3D models and assets for Blender and other 3D software"),
        ("icons_svg", "Scalable vector icons and graphics"),
        (
            "social_media_templates",
            "Templates optimized for social media platforms",
        ),
        (
            "ai_image_generators",
            "AI-powered tools for generating images and artwork",
        ),
        (
            "ai_video_tools",
            "Artificial intelligence tools for video creation and editing",
        ),
        (
            "ai_voice_cloning_tts",
            "AI voice synthesis and text-to-speech tools",
        ),
        (
            "ai_music_generators",
            "AI-powered music composition and generation tools",
        ),
        (
            "ai_face_animator",
            "AI tools for facial animation and deepfake creation",
        ),
        (
            "ai_caption_script_writers",
            "AI assistants for writing captions and scripts",
        ),
        (
            "ai_background_remover",
            "AI tools for automatic background removal",
        ),
        (
            "ai_social_media_designers",
            "AI-powered social media design automation tools",
        ),
    ])
});

static SUBGROUP_IMAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("video_templates", "/images/categories/video-templates.jpg"),
        ("luts_transitions_overlays", "/images/categories/luts-transitions.jpg"),
        ("canva_psd_figma_templates", "/images/categories/templates.jpg"),
        ("fonts", "/images/categories/fonts.jpg"),
        ("sound_fx_music", "/images/categories/audio.jpg"),
        ("3d_models", "/images/categories/3d-models.png"),
        ("icons_svg", "/images/categories/icons.png"),
        ("social_media_templates", "/images/categories/social-media.jpg"),
        ("ai_image_generators", "/images/categories/ai-tools.png"),
        ("ai_video_tools", "/images/categories/ai-tools.png"),
        ("ai_voice_cloning_tts", "/images/categories/ai-tools.png"),
        ("ai_music_generators", "/images/categories/ai-tools.png"),
        ("ai_face_animator", "/images/categories/ai-tools.png"),
        ("ai_caption_script_writers", "/images/categories/ai-tools.png"),
        ("ai_background_remover", "/images/categories/ai-tools.png"),
        ("ai_social_media_designers", "/images/categories/ai-tools.png"),
    ])
});

static DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Retro alakzat animációk keretes címmel",
            "Retro shape animations with framed titles",
        ),
        (
            "Részecskék vonala a képernyőn keresztül, logó felfedéssel",
            "Particle lines across screen with logo reveal",
        ),
        ("Kreatív modern nyitó sablon", "Creative modern opener template"),
        (
            "Színes parti füst háttér átmenet",
            "Colorful party smoke background transition",
        ),
        (
            "Professzionális prezentáció sablon",
            "Professional presentation template",
        ),
        ("Dinamikus szöveg animáció", "Dynamic text animation"),
        ("Modern logo bemutató", "Modern logo reveal"),
        ("Elegáns címsor animáció", "Elegant title animation"),
        ("Kreatív átmenet effektus", "Creative transition effect"),
        ("Színes LUT csomag", "Colorful LUT pack"),
        ("Természetes LUT gyűjtemény", "Natural LUT collection"),
        ("Klasszikus film LUT-ok", "Classic film LUTs"),
        ("Modern átmenetek", "Modern transitions"),
        ("Fény szivárgás effektusok", "Light leak effects"),
        ("Overlay effektusok", "Overlay effects"),
        ("Részecske effektusok", "Particle effects"),
        ("Modern sans-serif betűtípus", "Modern sans-serif font"),
        ("Elegáns serif betűtípus", "Elegant serif font"),
        ("Kreatív display font", "Creative display font"),
        ("Kézzel írott betűtípus", "Handwritten font"),
        ("Minimalista betűtípus", "Minimalist font"),
        ("Természeti hangok", "Nature sounds"),
        ("Háttérzene", "Background music"),
        ("Hangeffektusok", "Sound effects"),
        ("Chill lo-fi zene", "Chill lo-fi music"),
        ("Épület 3D modell", "Building 3D model"),
        ("Karakter 3D modell", "Character 3D model"),
        ("Bútor 3D modell", "Furniture 3D model"),
        ("Minimális ikon szett", "Minimal icon set"),
        ("Üzleti ikonok", "Business icons"),
        ("Közösségi média ikonok", "Social media icons"),
        ("UI/UX ikon csomag", "UI/UX icon pack"),
        ("Instagram post sablon", "Instagram post template"),
        ("YouTube thumbnail sablon", "YouTube thumbnail template"),
        ("Facebook borítókép", "Facebook cover template"),
        ("AI kép generátor", "AI image generator"),
        ("AI videó szerkesztő", "AI video editor"),
        ("AI hang klónozó", "AI voice cloning tool"),
        ("AI zene generátor", "AI music generator"),
        ("AI arc animátor", "AI face animator"),
        ("AI felirat író", "AI caption writer"),
        ("AI háttér eltávolító", "AI background remover"),
        ("AI közösségi média tervező", "AI social media designer"),
    ])
});

/// Translate a raw description. Exact-string match only; unknown strings
/// pass through unchanged.
pub fn translate_description(raw: &str) -> &str {
    DESCRIPTIONS.get(raw).copied().unwrap_or(raw)
}

/// Display name for a subgroup key, verbatim key if unknown.
pub fn subgroup_name(subgroup: &str) -> &str {
    SUBGROUP_NAMES.get(subgroup).copied().unwrap_or(subgroup)
}

/// Display description for a subgroup key, empty if unknown.
pub fn subgroup_description(subgroup: &str) -> &'static str {
    SUBGROUP_DESCRIPTIONS.get(subgroup).copied().unwrap_or("")
}

/// Category image for a subgroup key, falling back to the top-level
/// group's default image.
pub fn subgroup_image(subgroup: &str, group: CategoryMain) -> &'static str {
    SUBGROUP_IMAGES.get(subgroup).copied().unwrap_or(match group {
        CategoryMain::CreativeAssets => DEFAULT_CREATIVE_IMAGE,
        CategoryMain::AiTools => DEFAULT_AI_IMAGE,
    })
}
