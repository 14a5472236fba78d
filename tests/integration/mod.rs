mod sqlite_user_repository_test;
