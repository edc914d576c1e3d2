// Tue Aug 25 2026 - Alex

use crate::config::ProjectConfig;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}

pub const MAIN_TEMPLATE: &str = "main";
pub const PRELOADER_TEMPLATE: &str = "preloader";
pub const MENU_STATE_TEMPLATE: &str = "menu_state";
pub const PLAY_STATE_TEMPLATE: &str = "play_state";
pub const STYLESHEET_TEMPLATE: &str = "stylesheet";

static BUILT_IN_TEMPLATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut templates = HashMap::new();

    templates.insert(
        MAIN_TEMPLATE,
        r##"
package
{
	import org.flixel.*;
	[SWF(width="{{width}}", height="{{height}}", backgroundColor="#000000")]
	[Frame(factoryClass="{{preloader}}")]
	public class {{project}} extends FlxGame
	{
		public function {{project}}()
		{
			super({{width}}, {{height}}, {{menu_state}}, {{zoom}});
		}
	}
}
"##,
    );

    templates.insert(
        PRELOADER_TEMPLATE,
        r#"
package
{
	import org.flixel.system.FlxPreloader;
	public class {{preloader}} extends FlxPreloader
	{
		public function {{preloader}}()
		{
			className = "{{project}}";
			super();
		}
	}
}
"#,
    );

    templates.insert(
        MENU_STATE_TEMPLATE,
        r#"
package
{
	import org.flixel.*;

	public class {{menu_state}} extends FlxState
	{
		override public function create(): void
		{
			var text:FlxText;
			text = new FlxText(0, FlxG.height/2-10, FlxG.width, "{{project}}");
			text.size = 16;
			text.alignment = "center";
			add(text);
			text = new FlxText(FlxG.width/2-50, FlxG.height-20, 100, "click to play");
			text.alignment = "center";
			add(text);

			FlxG.mouse.show();
		}

		public override function update():void
		{
			super.update();

			if(FlxG.mouse.justPressed())
			{
				FlxG.mouse.hide();
				FlxG.switchState(new {{play_state}}());
			}
		}
	}
}
"#,
    );

    templates.insert(
        PLAY_STATE_TEMPLATE,
        r#"
package
{
	import org.flixel.*;

	public class {{play_state}} extends FlxState
	{
		override public function create(): void
		{
			add(new FlxText(0, 0, 100, "INSERT GAME HERE"));
		}
	}
}
"#,
    );

    // Not actual CSS. Flex Builder wants the flag before it accepts the file.
    templates.insert(
        STYLESHEET_TEMPLATE,
        "Add this: \"-defaults-css-url Default.css\"\nto the project's additional compiler arguments.",
    );

    templates
});

pub struct TemplateEngine {
    variables: HashMap<String, String>,
    delimiters: (String, String),
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
            delimiters: ("{{".to_string(), "}}".to_string()),
        }
    }

    pub fn with_delimiters(mut self, open: &str, close: &str) -> Self {
        self.delimiters = (open.to_string(), close.to_string());
        self
    }

    pub fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    pub fn set_from_config(&mut self, config: &ProjectConfig) {
        self.set_variable("project", &config.project_name);
        self.set_variable("width", &config.width.to_string());
        self.set_variable("height", &config.height.to_string());
        self.set_variable("zoom", &config.zoom.to_string());
        self.set_variable("preloader", &config.preloader_name);
        self.set_variable("menu_state", &config.menu_state_name);
        self.set_variable("play_state", &config.play_state_name);
    }

    pub fn render(&self, template_name: &str) -> Result<String, TemplateError> {
        let template = BUILT_IN_TEMPLATES
            .get(template_name)
            .ok_or_else(|| TemplateError::TemplateNotFound(template_name.to_string()))?;

        Ok(self.render_str(template))
    }

    // Plain substitution. Values go in verbatim (no escaping, no syntax
    // checks on class names) and unknown placeholders are left alone, so
    // rendering itself can never fail.
    pub fn render_str(&self, template: &str) -> String {
        let mut result = template.to_string();
        let (open, close) = &self.delimiters;

        for (key, value) in &self.variables {
            let placeholder = format!("{}{}{}", open, key, close);
            result = result.replace(&placeholder, value);
        }

        result
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub fn for_config(config: &ProjectConfig) -> TemplateEngine {
    let mut engine = TemplateEngine::new();
    engine.set_from_config(config);
    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_str_substitutes_variables() {
        let mut engine = TemplateEngine::new();
        engine.set_variable("name", "Foo");
        assert_eq!(engine.render_str("class {{name}} {}"), "class Foo {}");
    }

    #[test]
    fn test_render_str_leaves_unknown_placeholders() {
        let engine = TemplateEngine::new();
        assert_eq!(engine.render_str("{{missing}}"), "{{missing}}");
    }

    #[test]
    fn test_custom_delimiters() {
        let mut engine = TemplateEngine::new().with_delimiters("<%", "%>");
        engine.set_variable("x", "1");
        assert_eq!(engine.render_str("<%x%> {{x}}"), "1 {{x}}");
    }

    #[test]
    fn test_render_unknown_template_fails() {
        let engine = TemplateEngine::new();
        assert!(engine.render("nonsense").is_err());
    }

    #[test]
    fn test_main_template_defaults() {
        let engine = for_config(&ProjectConfig::new("Foo"));
        let code = engine.render(MAIN_TEMPLATE).unwrap();

        assert!(code.contains("public class Foo extends FlxGame"));
        assert!(code.contains(r##"[SWF(width="320", height="240", backgroundColor="#000000")]"##));
        assert!(code.contains(r#"[Frame(factoryClass="Preloader")]"#));
        assert!(code.contains("super(320, 240, MenuState, 2);"));
        assert!(!code.contains("{{"));
    }

    #[test]
    fn test_preloader_template_embeds_project_name() {
        let engine = for_config(&ProjectConfig::new("Foo"));
        let code = engine.render(PRELOADER_TEMPLATE).unwrap();

        assert!(code.contains("public class Preloader extends FlxPreloader"));
        assert!(code.contains(r#"className = "Foo";"#));
    }

    #[test]
    fn test_menu_state_template_switches_to_configured_play_state() {
        let config = ProjectConfig::new("Foo").with_play_state_name("GameState");
        let code = for_config(&config).render(MENU_STATE_TEMPLATE).unwrap();

        assert!(code.contains(r#"new FlxText(0, FlxG.height/2-10, FlxG.width, "Foo")"#));
        assert!(code.contains(r#""click to play""#));
        assert!(code.contains("FlxG.mouse.show();"));
        assert!(code.contains("FlxG.switchState(new GameState());"));
    }

    #[test]
    fn test_play_state_template_placeholder_text() {
        let engine = for_config(&ProjectConfig::new("Foo"));
        let code = engine.render(PLAY_STATE_TEMPLATE).unwrap();

        assert!(code.contains("public class PlayState extends FlxState"));
        assert!(code.contains(r#""INSERT GAME HERE""#));
    }

    #[test]
    fn test_stylesheet_template_names_compiler_flag() {
        let engine = for_config(&ProjectConfig::new("Foo"));
        let text = engine.render(STYLESHEET_TEMPLATE).unwrap();

        assert!(text.contains("-defaults-css-url Default.css"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let config = ProjectConfig::new("Foo").with_dimensions(800, 600);
        let a = for_config(&config).render(MAIN_TEMPLATE).unwrap();
        let b = for_config(&config).render(MAIN_TEMPLATE).unwrap();
        assert_eq!(a, b);
    }
}
