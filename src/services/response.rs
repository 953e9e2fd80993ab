use crate::services::factory::FactoryReply;

/// Content of a single deliverable chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseUnit {
    /// Nothing to send.
    Empty,
    Text(String),
    TextWithImage { text: String, image_url: String },
}

impl ResponseUnit {
    /// Normalize whatever the factory handed back into a unit.
    ///
    /// This is the only place the loose reply shapes (nothing, text only,
    /// text plus image, image only) are interpreted; past this point the
    /// pipeline deals in `ResponseUnit` exclusively.
    pub fn from_reply(reply: Option<FactoryReply>) -> Self {
        let Some(reply) = reply else {
            return ResponseUnit::Empty;
        };
        match (reply.text, reply.image_url) {
            (None, None) => ResponseUnit::Empty,
            (Some(text), None) => ResponseUnit::Text(text),
            (text, Some(image_url)) => ResponseUnit::TextWithImage {
                text: text.unwrap_or_default(),
                image_url,
            },
        }
    }
}

/// An ordered batch of responses. Dispatchers may nest batches; delivery
/// flattens them first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Unit(ResponseUnit),
    Batch(Vec<Response>),
}

impl Response {
    pub fn empty() -> Self {
        Response::Batch(Vec::new())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Response::Unit(ResponseUnit::Text(text.into()))
    }

    /// Flatten nested batches into delivery order, depth-first.
    pub fn flatten(self) -> Vec<ResponseUnit> {
        let mut units = Vec::new();
        let mut stack = vec![self];
        while let Some(next) = stack.pop() {
            match next {
                Response::Unit(unit) => units.push(unit),
                Response::Batch(items) => stack.extend(items.into_iter().rev()),
            }
        }
        units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reply_normalizes_to_empty() {
        assert_eq!(ResponseUnit::from_reply(None), ResponseUnit::Empty);
        let blank = FactoryReply {
            text: None,
            image_url: None,
        };
        assert_eq!(ResponseUnit::from_reply(Some(blank)), ResponseUnit::Empty);
    }

    #[test]
    fn image_without_text_keeps_the_image() {
        let reply = FactoryReply {
            text: None,
            image_url: Some("https://img.example/1.png".to_string()),
        };
        assert_eq!(
            ResponseUnit::from_reply(Some(reply)),
            ResponseUnit::TextWithImage {
                text: String::new(),
                image_url: "https://img.example/1.png".to_string(),
            }
        );
    }

    #[test]
    fn flatten_preserves_depth_first_order() {
        let nested = Response::Batch(vec![
            Response::text("a"),
            Response::Batch(vec![
                Response::text("b"),
                Response::Batch(vec![Response::text("c")]),
            ]),
            Response::text("d"),
        ]);
        let texts: Vec<_> = nested
            .flatten()
            .into_iter()
            .map(|unit| match unit {
                ResponseUnit::Text(text) => text,
                other => panic!("unexpected unit: {other:?}"),
            })
            .collect();
        assert_eq!(texts, ["a", "b", "c", "d"]);
    }
}
