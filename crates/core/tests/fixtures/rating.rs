// Generated by valwrap. Do not edit.

pub struct Rating {
    value: i32,
}

impl Rating {
    /// Validates `value` and wraps it on success.
    pub fn new(value: i32) -> ::core::result::Result<Self, ::valwrap_contract::ValidationError> {
        use ::valwrap_contract::Validate as _;
        demo_validators::Range::new(0, 100).validate(&value)?;
        Ok(Self { value })
    }
}

impl ::valwrap_contract::Wrapper for Rating {
    type Value = i32;

    fn value(&self) -> &i32 {
        &self.value
    }

    fn into_value(self) -> i32 {
        self.value
    }
}

impl ::core::cmp::PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl ::core::cmp::Eq for Rating {}

impl ::core::cmp::PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
        ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
    }
}

impl ::core::cmp::Ord for Rating {
    fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
        ::core::cmp::Ord::cmp(&self.value, &other.value)
    }
}

impl ::core::fmt::Debug for Rating {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_tuple("Rating").field(&self.value).finish()
    }
}

impl ::core::fmt::Display for Rating {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        ::core::fmt::Display::fmt(&self.value, f)
    }
}

impl ::core::convert::From<Rating> for i32 {
    fn from(wrapper: Rating) -> i32 {
        wrapper.value
    }
}

impl ::core::convert::TryFrom<i32> for Rating {
    type Error = ::valwrap_contract::ValidationError;

    fn try_from(value: i32) -> ::core::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}
