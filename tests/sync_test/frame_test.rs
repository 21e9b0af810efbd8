use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3A};
use simworld::{PhysicsBackend, Pose2, TeamSide, frame, normalize_angle};

use super::*;

fn angle_err(a: f32, b: f32) -> f32 {
    normalize_angle(a - b).abs()
}

fn assert_pose_eq(a: Pose2, b: Pose2) {
    assert!(
        a.translation.distance(b.translation) < EPS && angle_err(a.rotation, b.rotation) < 1e-5,
        "{a} != {b}"
    );
}

#[test]
fn test_normalize_angle() {
    assert_eq!(normalize_angle(PI), PI);
    assert_eq!(normalize_angle(-PI), -PI);
    assert_eq!(normalize_angle(0.5), 0.5);
    assert!((normalize_angle(PI + 0.5) - (0.5 - PI)).abs() < 1e-5);
    assert!((normalize_angle(-PI - 0.5) - (PI - 0.5)).abs() < 1e-5);
    assert!((-PI..=PI).contains(&normalize_angle(7.5 * PI)));
}

#[test]
fn test_pose_round_trip() {
    let poses = [
        Pose2::new(0.0, 1000.0, 0.0),
        Pose2::new(FRAC_PI_2, -2500.0, 1200.0),
        Pose2::new(-3.0, 4500.0, -3000.0),
        Pose2::new(PI, 0.0, 0.0),
    ];

    for side in TeamSide::ALL {
        for pose in poses {
            let raw = frame::pose_to_raw(pose, side);
            assert_pose_eq(frame::pose_to_canonical(raw, side), pose);
        }
    }
}

#[test]
fn test_placement_round_trip() {
    let pos = Vec3A::new(-1500.0, 800.0, 320.0);
    let rot = Vec3A::new(0.0, 0.0, 2.5);

    for side in TeamSide::ALL {
        let (raw_pos, raw_rot) = frame::placement_to_raw(pos, rot, side);
        assert_eq!(raw_pos.z, pos.z);

        let raw_pose = Pose2 {
            rotation: raw_rot.z,
            translation: raw_pos.truncate(),
        };
        let expected = Pose2 {
            rotation: rot.z,
            translation: pos.truncate(),
        };
        assert_pose_eq(frame::pose_to_canonical(raw_pose, side), expected);

        let ball_raw = frame::ball_placement_to_raw(pos, side);
        let ball_back = frame::ball_position_to_canonical(ball_raw / 1000.0, PhysicsBackend::Full3D, side);
        assert!(ball_back.distance(pos) < EPS);
    }
}

#[test]
fn test_first_team_sees_rotated_field() {
    let raw = Pose2::new(0.0, 1000.0, 0.0);

    let first = frame::pose_to_canonical(raw, TeamSide::First);
    assert_eq!(first.translation, Vec2::new(-1000.0, 0.0));
    assert_eq!(first.rotation, PI);

    let second = frame::pose_to_canonical(raw, TeamSide::Second);
    assert_eq!(second, raw);
}

#[test]
fn test_odometry_uses_field_rotation() {
    let pose = Pose2::new(0.25, 300.0, -200.0);
    assert_eq!(frame::odometry_from_pose(pose, TeamSide::Second), pose);
    assert_pose_eq(
        frame::odometry_from_pose(pose, TeamSide::First),
        Pose2::new(0.25 - PI, -300.0, 200.0),
    );
}

#[test]
fn test_ball_position_backends() {
    let raw = Vec3A::new(1.2, -0.4, 0.3);

    let flat = frame::ball_position_to_canonical(raw, PhysicsBackend::Flat2D, TeamSide::Second);
    assert!(flat.distance(Vec3A::new(1200.0, -400.0, 50.0)) < EPS);

    let full = frame::ball_position_to_canonical(raw, PhysicsBackend::Full3D, TeamSide::First);
    assert!(full.distance(Vec3A::new(-1200.0, 400.0, 300.0)) < EPS);
}

#[test]
fn test_move_robot_per_team_round_trip() {
    let test_match = TestMatch::new(&[2, 9], &[]);

    for number in [2, 9] {
        let robot = test_match.sync(number, test_config(PhysicsBackend::Full3D));
        let target = Pose2::new(-2.0, 1500.0, -750.0);

        robot.move_robot_per_team(
            Vec3A::new(target.translation.x, target.translation.y, 320.0),
            Vec3A::new(0.0, 0.0, target.rotation),
            true,
            true,
        );

        assert_pose_eq(robot.own_pose(), target);
        let body = test_match.robot(number);
        assert!((body.borrow().pos.z - 0.32).abs() < 1e-5);
        assert_eq!(body.borrow().reset_count, 1);
    }
}

#[test]
fn test_move_robot_keeps_rotation() {
    let test_match = TestMatch::new(&[3], &[]);
    let robot = test_match.sync(3, test_config(PhysicsBackend::Full3D));
    let rot_before = test_match.robot(3).borrow().rot;

    robot.move_robot(Vec3A::new(100.0, 200.0, 0.0), Vec3A::new(0.0, 0.0, 1.0), false, false);

    let body = test_match.robot(3);
    assert_eq!(body.borrow().rot, rot_before);
    assert!(body.borrow().pos.distance(Vec3A::new(0.1, 0.2, 0.0)) < 1e-6);
    assert_eq!(body.borrow().reset_count, 0);
}

#[test]
fn test_move_ball_per_team() {
    let test_match = TestMatch::new(&[1, 8], &[]);
    let first = test_match.sync(1, test_config(PhysicsBackend::Full3D));
    let second = test_match.sync(8, test_config(PhysicsBackend::Full3D));

    first.move_ball_per_team(Vec3A::new(1000.0, 500.0, 50.0), true);
    assert!(test_match.ball_body.borrow().pos.distance(Vec3A::new(-1.0, -0.5, 0.05)) < 1e-6);
    assert_eq!(test_match.ball_body.borrow().reset_count, 1);

    second.move_ball_per_team(Vec3A::new(1000.0, 500.0, 50.0), false);
    assert!(test_match.ball_body.borrow().pos.distance(Vec3A::new(1.0, 0.5, 0.05)) < 1e-6);
    assert_eq!(test_match.ball_body.borrow().reset_count, 1);
}

#[test]
fn test_move_ball_without_ball() {
    let test_match = TestMatch::new(&[1], &[]);
    test_match.ball.set(None);
    let robot = test_match.sync(1, test_config(PhysicsBackend::Full3D));

    robot.move_ball(Vec3A::new(1000.0, 0.0, 50.0), true);
    assert_eq!(test_match.ball_body.borrow().reset_count, 0);
    assert_eq!(robot.absolute_ball_position(), None);
}

#[test]
fn test_absolute_ball_position_is_raw() {
    let test_match = TestMatch::new(&[1], &[]);
    test_match.put_ball(0.75, -0.25);
    let robot = test_match.sync(1, test_config(PhysicsBackend::Full3D));

    let pos = robot.absolute_ball_position().unwrap();
    assert!(pos.distance(Vec2::new(750.0, -250.0)) < EPS);
}
