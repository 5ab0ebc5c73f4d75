#[cfg(test)]
mod protocol_tests {
    use std::net::SocketAddr;
    use crate::protocol::enums::ack_outcome::AckOutcome;
    use crate::protocol::enums::protocol_error::ProtocolError;
    use crate::protocol::enums::request::Request;
    use crate::protocol::enums::tracker_reply::TrackerReply;
    use crate::protocol::protocol::{format_holders, parse_holders, FILE_NOT_FOUND};
    use crate::protocol::structs::download_ack::DownloadAck;
    use crate::protocol::structs::file_query::FileQuery;

    #[test]
    fn test_parse_share() {
        let request = Request::parse("share movie.mp4 10.0.0.1 40000 9001 6884").unwrap();
        match request {
            Request::Share(share) => {
                assert_eq!(share.file_name, "movie.mp4");
                assert_eq!(share.tracker_address, "10.0.0.1");
                assert_eq!(share.listen_port, 40000);
                assert_eq!(share.server_port, 9001);
                assert_eq!(share.ping_port, 6884);
            }
            other => panic!("expected share, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_get_tolerates_extra_whitespace() {
        let request = Request::parse("  get \t notes.txt \n").unwrap();
        assert_eq!(request, Request::Get(FileQuery { file_name: "notes.txt".to_string() }));
    }

    #[test]
    fn test_parse_ack() {
        let request = Request::parse("ack movie.mp4 9100 failure 6884").unwrap();
        assert_eq!(request, Request::Ack(DownloadAck {
            file_name: "movie.mp4".to_string(),
            server_port: 9100,
            outcome: AckOutcome::Failure,
            ping_port: 6884,
        }));
    }

    #[test]
    fn test_missing_fields_are_rejected_before_indexing() {
        assert_eq!(
            Request::parse("share movie.mp4 10.0.0.1"),
            Err(ProtocolError::MissingFields { verb: "share", expected: 6, got: 3 })
        );
        assert!(matches!(Request::parse("get"), Err(ProtocolError::MissingFields { .. })));
        assert!(matches!(Request::parse("ack a 1 success"), Err(ProtocolError::MissingFields { .. })));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(matches!(Request::parse("share f t 70000 1 1"), Err(ProtocolError::InvalidPort(_))));
        assert!(matches!(Request::parse("ack f 9001 maybe 1"), Err(ProtocolError::InvalidOutcome(_))));
        assert!(matches!(Request::parse("delete f"), Err(ProtocolError::UnknownVerb(_))));
        assert_eq!(Request::parse("   "), Err(ProtocolError::Empty));
    }

    #[test]
    fn test_garbled_bytes_do_not_panic() {
        let garbage: Vec<u8> = (0u8..=255).collect();
        assert!(Request::from_bytes(&garbage).is_err());
        assert!(Request::from_bytes(&[0xff, 0xfe, b' ', b'g']).is_err());
        assert!(Request::from_bytes(b"get\0\0\0").is_err());
    }

    #[test]
    fn test_rendered_messages_parse_back() {
        let ack = DownloadAck {
            file_name: "a.bin".to_string(),
            server_port: 9200,
            outcome: AckOutcome::Success,
            ping_port: 6884,
        };
        assert_eq!(ack.to_string(), "ack a.bin 9200 success 6884");
        assert_eq!(Request::parse(&ack.to_string()).unwrap(), Request::Ack(ack));
    }

    #[test]
    fn test_holders_format() {
        let holders: Vec<SocketAddr> = vec!["10.0.0.1:9001".parse().unwrap(), "[::1]:9002".parse().unwrap()];
        let body = format_holders(&holders);
        assert_eq!(body, "10.0.0.1:9001, [::1]:9002");
        assert_eq!(parse_holders(&body).unwrap(), holders);
    }

    #[test]
    fn test_tracker_reply_parse() {
        assert_eq!(TrackerReply::parse(FILE_NOT_FOUND).unwrap(), TrackerReply::NotFound);
        assert_eq!(
            TrackerReply::parse("127.0.0.1:9001,127.0.0.2:9002").unwrap(),
            TrackerReply::Holders(vec!["127.0.0.1:9001".parse().unwrap(), "127.0.0.2:9002".parse().unwrap()])
        );
        assert!(matches!(TrackerReply::parse("Invalid command"), Err(ProtocolError::InvalidHolder(_))));
        assert_eq!(TrackerReply::parse(" , "), Err(ProtocolError::EmptyHolderList));
    }
}
