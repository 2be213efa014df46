#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum FtpCommand {
    USER,
    PASS,
    PWD,
    CWD,
    LIST,
    SYST,
    TYPE,
    QUIT,
    PASV,
}

impl FtpCommand {
    const ALL: [FtpCommand; 9] = [
        FtpCommand::USER,
        FtpCommand::PASS,
        FtpCommand::PWD,
        FtpCommand::CWD,
        FtpCommand::LIST,
        FtpCommand::SYST,
        FtpCommand::TYPE,
        FtpCommand::QUIT,
        FtpCommand::PASV,
    ];

    pub fn verb(&self) -> &'static str {
        match self {
            FtpCommand::USER => "USER",
            FtpCommand::PASS => "PASS",
            FtpCommand::PWD => "PWD",
            FtpCommand::CWD => "CWD",
            FtpCommand::LIST => "LIST",
            FtpCommand::SYST => "SYST",
            FtpCommand::TYPE => "TYPE",
            FtpCommand::QUIT => "QUIT",
            FtpCommand::PASV => "PASV",
        }
    }

    /// Splits a command line into its verb and the remaining argument text.
    ///
    /// The verb is matched case-sensitively as a prefix of the line, so
    /// `LIST -la` and `LISTING` both resolve to LIST.
    pub fn parse(line: &str) -> Option<(FtpCommand, &str)> {
        Self::ALL.iter().find_map(|cmd| {
            line.strip_prefix(cmd.verb())
                .map(|rest| (*cmd, rest.trim()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verb_and_argument() {
        assert_eq!(
            FtpCommand::parse("USER anonymous"),
            Some((FtpCommand::USER, "anonymous"))
        );
        assert_eq!(FtpCommand::parse("PASV"), Some((FtpCommand::PASV, "")));
        assert_eq!(FtpCommand::parse("TYPE I"), Some((FtpCommand::TYPE, "I")));
        assert_eq!(FtpCommand::parse("PWD"), Some((FtpCommand::PWD, "")));
    }

    #[test]
    fn test_parse_is_prefix_match() {
        assert_eq!(FtpCommand::parse("LISTING"), Some((FtpCommand::LIST, "ING")));
        assert_eq!(FtpCommand::parse("QUIT now"), Some((FtpCommand::QUIT, "now")));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(FtpCommand::parse("user x"), None);
        assert_eq!(FtpCommand::parse("Pasv"), None);
    }

    #[test]
    fn test_parse_unknown_verbs() {
        assert_eq!(FtpCommand::parse("FOO"), None);
        assert_eq!(FtpCommand::parse("RETR a.txt"), None);
        assert_eq!(FtpCommand::parse(""), None);
        assert_eq!(FtpCommand::parse(" USER x"), None);
    }

    #[test]
    fn test_every_verb_round_trips() {
        for cmd in FtpCommand::ALL {
            assert_eq!(FtpCommand::parse(cmd.verb()), Some((cmd, "")));
        }
    }
}
