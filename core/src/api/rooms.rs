use crate::client::WzsServiceClient;
use crate::envelope::Controller;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    Department, GetRoomListParameters, GetRoomOccupancyParams, Room, RoomOccupancyStatus,
    Roomstyle, Roomtype, SessionParameters,
};

impl<T: Transport> WzsServiceClient<T> {
    pub fn get_department_list(
        &self,
        params: &SessionParameters,
    ) -> Result<Vec<Department>, ApiError> {
        self.call(Controller::WZS, "GetDepartmentList", params)
    }

    pub fn get_room_list(&self, params: &GetRoomListParameters) -> Result<Vec<Room>, ApiError> {
        self.call(Controller::WZS, "GetRoomList", params)
    }

    /// One row per room per day in the requested period.
    pub fn get_room_occupancy(
        &self,
        params: &GetRoomOccupancyParams,
    ) -> Result<Vec<RoomOccupancyStatus>, ApiError> {
        self.call(Controller::WZS, "GetRoomOccupancy", params)
    }

    /// Like [`get_room_occupancy`](Self::get_room_occupancy), short-stay rooms only.
    pub fn get_short_stay_room_occupancy(
        &self,
        params: &GetRoomOccupancyParams,
    ) -> Result<Vec<RoomOccupancyStatus>, ApiError> {
        self.call(Controller::WZS, "GetShortStayRoomOccupancy", params)
    }

    pub fn get_roomtypes(&self, params: &SessionParameters) -> Result<Vec<Roomtype>, ApiError> {
        self.call(Controller::WZS, "GetRoomtypes", params)
    }

    pub fn get_roomstyles(&self, params: &SessionParameters) -> Result<Vec<Roomstyle>, ApiError> {
        self.call(Controller::WZS, "GetRoomstyles", params)
    }
}
