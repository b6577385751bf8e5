use crate::core::config::data::Config;

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.default_mode {
            Some(mode) => println!("  default-mode: {} ({})", mode.slug(), mode.label()),
            None => println!("  default-mode: (unset)"),
        }
        match &self.default_model {
            Some(model) => println!("  default-model: {model}"),
            None => println!("  default-model: (unset)"),
        }
        match self.default_temperature {
            Some(temperature) => println!("  default-temperature: {temperature:.2}"),
            None => println!("  default-temperature: (unset)"),
        }
        match &self.base_url {
            Some(url) => println!("  base-url: {url}"),
            None => println!("  base-url: (unset)"),
        }
        match &self.theme {
            Some(theme) => println!("  theme: {theme}"),
            None => println!("  theme: (unset)"),
        }
        if !self.models.is_empty() {
            println!("  models: {}", self.models.join(", "));
        }
    }
}
