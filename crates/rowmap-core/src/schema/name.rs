use std_util::str;

use std::fmt;

/// A model or association name, split into lowercase words so that
/// `OrderItem` and `order_item` compare equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(src);
        let parts = snake.split('_').map(String::from).collect();
        Self { parts }
    }

    pub fn upper_camel_case(&self) -> String {
        str::upper_camel_case(&self.snake_case())
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// The singular form, used to infer a `has_many` target from the
    /// association name.
    pub fn singularize(&self) -> Self {
        Self::new(&str::singularize(&self.snake_case()))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.upper_camel_case())
    }
}
