use std::borrow::Cow;
use uhub_domain::objects::ObjectType;

/// Failures of the mapping engine.
///
/// None of these is transient: a missing mapper is a configuration gap and everything else is
/// a data error, so [`UnificationError::is_retryable`] is always `false`.
#[uhub_derive::uhub_error]
pub enum UnificationError {
    #[error("Unsupported target type for {provider}: {object_type}{}", format_context(.context))]
    UnsupportedMapping {
        object_type: ObjectType,
        provider: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("Malformed field mapping at index {index}{}: {message}", format_context(.context))]
    MalformedFieldMapping {
        index: usize,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Cannot transform {object_type} for {provider} at `{field}`{}: {message}",
        format_context(.context)
    )]
    Transform {
        object_type: ObjectType,
        provider: String,
        field: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal unification error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl UnificationError {
    pub(crate) fn transform(
        object_type: ObjectType,
        provider: &str,
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Transform {
            object_type,
            provider: provider.to_owned(),
            field: field.into(),
            message: message.into(),
            context: None,
        }
    }

    /// Replaces the context of any variant.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<Cow<'static, str>>) -> Self {
        let (Self::UnsupportedMapping { context: slot, .. }
        | Self::MalformedFieldMapping { context: slot, .. }
        | Self::Transform { context: slot, .. }
        | Self::Serialization { context: slot, .. }
        | Self::Internal { context: slot, .. }) = &mut self;
        *slot = Some(context.into());
        self
    }

    /// The request named something the registry cannot serve, or described it badly.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::UnsupportedMapping { .. } | Self::MalformedFieldMapping { .. })
    }

    /// The payload itself could not be translated.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Transform { .. } | Self::Serialization { .. })
    }

    /// Stable snake_case name of the variant, used in API error bodies.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedMapping { .. } => "unsupported_mapping",
            Self::MalformedFieldMapping { .. } => "malformed_field_mapping",
            Self::Transform { .. } => "transform",
            Self::Serialization { .. } => "serialization",
            Self::Internal { .. } => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uhub_domain::objects::CrmObject;

    #[test]
    fn unsupported_mapping_names_provider_and_object_type() {
        let err = UnificationError::UnsupportedMapping {
            object_type: CrmObject::Stage.into(),
            provider: "unknownprovider".to_owned(),
            context: None,
        };
        assert_eq!(err.to_string(), "Unsupported target type for unknownprovider: crm.stage");
        assert!(err.is_configuration());
        assert!(!err.is_data());
        assert!(!err.is_retryable());
    }

    #[test]
    fn context_is_rendered_after_the_summary() {
        let err: Result<(), _> =
            Err(UnificationError::transform(CrmObject::Deal.into(), "zoho", "Deal_Name", "missing"));
        let err = err.context("element 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot transform crm.deal for zoho at `Deal_Name` (element 2): missing"
        );
        assert!(err.is_data());
        assert_eq!(err.kind(), "transform");
    }
}
