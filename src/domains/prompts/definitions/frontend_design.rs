//! Front-end design prompt definition.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

/// Long-form brief for building a distinctive, production-grade front end.
pub struct FrontendDesignPrompt;

impl PromptDefinition for FrontendDesignPrompt {
    const NAME: &'static str = "frontend_design";
    const DESCRIPTION: &'static str =
        "Front-end design brief: build a distinctive, production-grade interface from requirements";

    fn template() -> &'static str {
        r#"You are a professional front-end designer. Build a distinctive, production-grade interface for the requirements below.

## User Requirements
{{requirements}}

## Design Thinking
Before writing code, understand the context and commit to a bold aesthetic direction:

- Purpose: what problem does this interface solve, and who uses it?
- Tone: pick an extreme: brutally minimal, maximalist chaos, retro-futuristic, organic and natural, luxury and refined, playful and toy-like, editorial magazine, brutalist, art deco geometric, soft pastel, industrial utilitarian.
- Constraints: technical requirements (framework, performance, accessibility).
- Differentiation: what makes this design unforgettable? What will users remember?

### Key: choose a clear conceptual direction and execute it with precision. Bold maximalism and refined minimalism both work. What matters is intentionality, not intensity.

Then implement working code (HTML/CSS/JS, React, Vue, etc.) that is:

- Production-grade and fully functional
- Visually striking and memorable
- Cohesive with a clear aesthetic point of view
- Meticulously refined in every detail

## Front-end Aesthetics Guidelines
- Typography: choose beautiful, unique, interesting fonts. Avoid generic fonts like Arial and Inter; pick characterful choices that elevate the design. Pair a distinctive display font with a refined body font.

- Color and theme: commit to a cohesive aesthetic. Use CSS variables for consistency. Dominant colors with sharp accents beat timid, evenly distributed palettes.

- Motion: use animation for effects and micro-interactions. Prefer CSS-only solutions for HTML; use the Motion library for React when available. Focus on high-impact moments: one well-orchestrated page load with staggered reveals delights more than scattered micro-interactions. Use scroll triggers and hover states that surprise.

- Spatial composition: unexpected layouts. Asymmetry. Overlap. Diagonal flow. Grid-breaking elements. Generous negative space or controlled density.

- Backgrounds and visual details: create atmosphere and depth instead of defaulting to solid colors. Add contextual effects and textures that match the overall aesthetic: gradient meshes, noise textures, geometric patterns, layered transparencies, dramatic shadows, decorative borders, custom cursors and grain overlays.

## Never
Never use generic AI-generated aesthetics:

Overused font families (Inter, Roboto, Arial, system fonts)
Cliched color schemes (particularly purple gradients on white backgrounds)
Predictable layouts and component patterns
Cookie-cutter design that lacks context-specific character
Every design should be different. Vary between light and dark themes, different fonts, different aesthetics. Never converge on common choices (such as Space Grotesk) across generations.

Important: match implementation complexity to the aesthetic vision. Maximalist designs need elaborate code with extensive animations and effects. Minimalist or refined designs need restraint, precision and careful attention to spacing, typography and subtle details.

Produce complete, runnable front-end code (HTML/CSS/JS or React/Vue).

Note: if a front-end interface already exists, read it first to understand the context of the user's requirements."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![argument(
            "requirements",
            "What the interface should do and who it is for",
            true,
        )]
    }
}
