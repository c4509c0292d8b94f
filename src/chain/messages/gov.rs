use super::{ComposeError, Msg};
use crate::chain::proto::cosmos::gov::v1::MsgVote;

pub use crate::chain::proto::cosmos::gov::v1::VoteOption;

/// Governance vote on `proposal_id`
pub fn vote(proposal_id: u64, voter: &str, option: VoteOption) -> Msg {
    Msg::Vote(MsgVote {
        proposal_id,
        voter: voter.to_string(),
        option: option as i32,
        metadata: String::new(),
    })
}

/// Proposal ids travel as decimal strings in the UI and REST layer
pub fn parse_proposal_id(input: &str) -> Result<u64, ComposeError> {
    input
        .trim()
        .parse()
        .map_err(|_| ComposeError::InvalidProposalId(input.to_string()))
}

/// Accepts "yes", "no", "abstain", "no_with_veto"/"veto" and the
/// `VOTE_OPTION_*` proto names
pub fn parse_vote_option(input: &str) -> Result<VoteOption, ComposeError> {
    let normalized = input.trim().to_ascii_uppercase().replace('-', "_");
    let normalized = normalized.strip_prefix("VOTE_OPTION_").unwrap_or(&normalized);
    match normalized {
        "YES" => Ok(VoteOption::Yes),
        "NO" => Ok(VoteOption::No),
        "ABSTAIN" => Ok(VoteOption::Abstain),
        "NO_WITH_VETO" | "NOWITHVETO" | "VETO" => Ok(VoteOption::NoWithVeto),
        _ => Err(ComposeError::InvalidVoteOption(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_message() {
        let proposal_id = parse_proposal_id("42").unwrap();
        match vote(proposal_id, "quick1voter", VoteOption::Yes) {
            Msg::Vote(m) => {
                assert_eq!(m.proposal_id, 42);
                assert_eq!(m.voter, "quick1voter");
                assert_eq!(m.option(), VoteOption::Yes);
                assert_eq!(m.option, 1);
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_vote_option_parsing() {
        assert_eq!(parse_vote_option("VOTE_OPTION_YES").unwrap(), VoteOption::Yes);
        assert_eq!(parse_vote_option("no").unwrap(), VoteOption::No);
        assert_eq!(parse_vote_option("no-with-veto").unwrap(), VoteOption::NoWithVeto);
        assert_eq!(parse_vote_option("abstain").unwrap(), VoteOption::Abstain);
        assert!(parse_vote_option("maybe").is_err());
    }

    #[test]
    fn test_proposal_id_parsing() {
        assert!(parse_proposal_id("-1").is_err());
        assert!(parse_proposal_id("abc").is_err());
        assert_eq!(parse_proposal_id(" 7 ").unwrap(), 7);
    }
}
