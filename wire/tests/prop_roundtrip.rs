use std::io::Cursor;

use message::{Opcode, Request, Response, Status, HEADER_SIZE};
use proptest::prelude::*;
use wire::{receive_response, transmit_request, transmit_response, Limits};

fn segment_strategy(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max)
}

proptest! {
    #[test]
    fn prop_response_roundtrip(
        opcode in any::<u8>(),
        status in any::<u16>(),
        opaque in any::<u32>(),
        cas in any::<u64>(),
        extras in segment_strategy(20),
        key in segment_strategy(64),
        body in segment_strategy(256),
    ) {
        let original = Response {
            opcode: Opcode::from_raw(opcode),
            status: Status::from_raw(status),
            opaque,
            cas,
            extras,
            key,
            body,
        };

        let mut frame = Vec::new();
        transmit_response(Some(&mut frame), &original).unwrap();
        prop_assert_eq!(frame.len(), original.size());

        let mut stream = Cursor::new(frame);
        let mut header_buf = [0u8; HEADER_SIZE];
        let received =
            receive_response(Some(&mut stream), &mut header_buf, &Limits::default()).unwrap();

        prop_assert_eq!(received.is_success(), status == 0);
        prop_assert_eq!(received.status(), Status::from_raw(status));
        prop_assert_eq!(received.into_response(), original);
    }

    #[test]
    fn prop_request_frame_decodes_symmetrically(
        opcode in any::<u8>(),
        vbucket in any::<u16>(),
        opaque in any::<u32>(),
        cas in any::<u64>(),
        extras in segment_strategy(20),
        key in segment_strategy(64),
        body in segment_strategy(256),
    ) {
        let request = Request {
            opcode: Opcode::from_raw(opcode),
            vbucket,
            opaque,
            cas,
            extras: extras.clone(),
            key: key.clone(),
            body: body.clone(),
        };

        let mut frame = Vec::new();
        transmit_request(Some(&mut frame), &request).unwrap();
        prop_assert_eq!(frame.len(), request.size());

        // The request magic is accepted on the receive path; the vbucket id
        // lands in the status slot.
        let mut stream = Cursor::new(frame);
        let mut header_buf = [0u8; HEADER_SIZE];
        let received =
            receive_response(Some(&mut stream), &mut header_buf, &Limits::default()).unwrap();
        let decoded = received.into_response();

        prop_assert_eq!(decoded.opcode, Opcode::from_raw(opcode));
        prop_assert_eq!(decoded.status, Status::from_raw(vbucket));
        prop_assert_eq!(decoded.opaque, opaque);
        prop_assert_eq!(decoded.cas, cas);
        prop_assert_eq!(decoded.extras, extras);
        prop_assert_eq!(decoded.key, key);
        prop_assert_eq!(decoded.body, body);
    }

    #[test]
    fn prop_truncated_frames_never_decode(
        key in segment_strategy(32),
        body in prop::collection::vec(any::<u8>(), 1..128),
        cut in any::<prop::sample::Index>(),
    ) {
        let original = Response {
            key,
            body,
            ..Response::default()
        };
        let mut frame = Vec::new();
        transmit_response(Some(&mut frame), &original).unwrap();

        let cut = cut.index(frame.len());
        let mut stream = Cursor::new(&frame[..cut]);
        let mut header_buf = [0u8; HEADER_SIZE];
        let result = receive_response(Some(&mut stream), &mut header_buf, &Limits::default());
        let is_stream_error = matches!(result, Err(wire::WireError::Stream { .. }));
        prop_assert!(is_stream_error);
    }
}
