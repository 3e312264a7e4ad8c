use bitflags::bitflags;
use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;

/// One entry per capture group, in group order; `None` when the group did not participate.
pub type CaptureList = SmallVec<[Option<String>; 4]>;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RegexFlags: u8 {
        const IGNORE_CASE = 1 << 0;
        const UNICODE = 1 << 1;
    }
}

#[derive(Debug, Clone)]
pub struct CompiledRegex {
    regex: Regex,
    flags: RegexFlags,
}

impl CompiledRegex {
    pub fn compile(source: &str, flags: RegexFlags) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.contains(RegexFlags::IGNORE_CASE))
            .unicode(flags.contains(RegexFlags::UNICODE))
            .build()?;

        Ok(Self { regex, flags })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    pub fn captures(&self, input: &str) -> Option<CaptureList> {
        let captures = self.regex.captures(input)?;

        Some(
            captures
                .iter()
                .skip(1)
                .map(|m| m.map(|m| m.as_str().to_string()))
                .collect(),
        )
    }
}

impl PartialEq for CompiledRegex {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str() && self.flags == other.flags
    }
}

impl Eq for CompiledRegex {}
